use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error, info, management::TokenManager, spotify::catalog, success, warning};

/// Shows who the cached token belongs to, the post-login identity check.
pub async fn me() {
    let token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run soniq auth\n Error: {}",
                e
            );
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching user profile...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let profile = catalog::get_me(token_mgr.access_token()).await;
    pb.finish_and_clear();

    match profile {
        Ok(profile) => {
            let display_name = profile
                .display_name
                .unwrap_or_else(|| "Usuario".to_string());
            success!("Logged in as {}", display_name);
            info!("id: {}", profile.id);
        }
        Err(e) => warning!("Failed to fetch user profile. Err: {}", e),
    }
}
