use crate::{error, info, management::PrefsManager, success};

/// Shows or updates the persisted preferences. With no flags the current
/// values are printed; any flag updates its field and persists the result.
pub async fn config(
    theme: Option<String>,
    accent: Option<String>,
    font: Option<String>,
    lang: Option<String>,
    quality: Option<String>,
) {
    let mut prefs_mgr = PrefsManager::load_or_default().await;

    let mut changed = false;
    if let Some(theme) = theme {
        prefs_mgr.prefs_mut().theme = theme;
        changed = true;
    }
    if let Some(accent) = accent {
        prefs_mgr.prefs_mut().accent = accent;
        changed = true;
    }
    if let Some(font) = font {
        prefs_mgr.prefs_mut().font = font;
        changed = true;
    }
    if let Some(lang) = lang {
        prefs_mgr.prefs_mut().lang = lang;
        changed = true;
    }
    if let Some(quality) = quality {
        prefs_mgr.prefs_mut().quality = quality;
        changed = true;
    }

    if changed {
        if let Err(e) = prefs_mgr.persist().await {
            error!("Failed to save preferences: {}", e);
        }
        success!("Preferences saved.");
    }

    let prefs = prefs_mgr.prefs();
    info!("theme: {}", prefs.theme);
    info!("accent: {}", prefs.accent);
    info!("font: {}", prefs.font);
    info!("lang: {}", prefs.lang);
    info!("quality: {}", prefs.quality);
}
