use std::path::PathBuf;

use crate::types::Preferences;

/// Owns the persisted user preferences (theme, accent, font, lang, quality).
pub struct PrefsManager {
    prefs: Preferences,
}

impl PrefsManager {
    pub fn new(prefs: Preferences) -> Self {
        PrefsManager { prefs }
    }

    /// Loads preferences from disk, falling back to the defaults when the
    /// file is missing or unreadable. Matches the original behavior of
    /// reading `soniq_prefs` with per-field defaults.
    pub async fn load_or_default() -> Self {
        let path = Self::prefs_path();
        match async_fs::read_to_string(&path).await {
            Ok(content) => {
                let prefs = serde_json::from_str(&content).unwrap_or_default();
                Self { prefs }
            }
            Err(_) => Self {
                prefs: Preferences::default(),
            },
        }
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::prefs_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.prefs).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    /// Removes the stored preferences. Idempotent: a missing file is fine.
    pub async fn clear() -> Result<(), String> {
        match async_fs::remove_file(Self::prefs_path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.to_string()),
        }
    }

    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    pub fn prefs_mut(&mut self) -> &mut Preferences {
        &mut self.prefs
    }

    fn prefs_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("soniq/state/prefs.json");
        path
    }
}
