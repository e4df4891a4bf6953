use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use soniq::{cli, config, error, types::Token};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Clear all local session data (token, verifier, preferences)
    Logout,

    /// Browse featured playlists
    Browse(BrowseOptions),

    /// Search previewable tracks
    Search(SearchOptions),

    /// Show the authenticated user's profile
    Me,

    /// Queue tracks and play 30-second previews
    Play(PlayOptions),

    /// Show or update preferences
    Config(ConfigOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct BrowseOptions {
    /// ISO country code for regional curation
    #[clap(long, default_value = "US")]
    pub country: String,

    /// Maximum number of playlists to list
    #[clap(long, default_value_t = 12)]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Free-text track query
    pub query: String,

    /// Maximum number of tracks to list
    #[clap(long, default_value_t = 30)]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct PlayOptions {
    /// Queue the tracks of this playlist id
    #[clap(long, conflicts_with = "search")]
    pub playlist: Option<String>,

    /// Queue the tracks matching this query
    #[clap(long)]
    pub search: Option<String>,

    /// Maximum number of tracks to queue
    #[clap(long, default_value_t = 50)]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct ConfigOptions {
    #[clap(long)]
    pub theme: Option<String>,
    #[clap(long)]
    pub accent: Option<String>,
    #[clap(long)]
    pub font: Option<String>,
    #[clap(long)]
    pub lang: Option<String>,
    #[clap(long)]
    pub quality: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<Token>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Logout => cli::logout().await,
        Command::Browse(opt) => cli::browse(opt.country, opt.limit).await,
        Command::Search(opt) => cli::search(opt.query, opt.limit).await,
        Command::Me => cli::me().await,
        Command::Play(opt) => cli::play(opt.playlist, opt.search, opt.limit).await,
        Command::Config(opt) => {
            cli::config(opt.theme, opt.accent, opt.font, opt.lang, opt.quality).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
