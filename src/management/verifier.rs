use std::path::PathBuf;

/// Owns the persisted PKCE code verifier. The verifier only needs to survive
/// the redirect round-trip: it is written when login starts and removed as
/// soon as the code exchange succeeds, so a stale verifier can never be
/// reused against a later authorization code.
pub struct VerifierManager {
    verifier: String,
}

impl VerifierManager {
    pub fn new(verifier: String) -> Self {
        VerifierManager { verifier }
    }

    /// Loads the verifier persisted by a previous login start. Errors when
    /// none is stored, meaning the PKCE flow was started elsewhere (or not
    /// at all).
    pub async fn load() -> Result<Self, String> {
        let path = Self::verifier_path();
        let verifier = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        Ok(Self { verifier })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::verifier_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        async_fs::write(path, &self.verifier)
            .await
            .map_err(|e| e.to_string())
    }

    /// Removes the stored verifier. Idempotent: a missing file is fine.
    pub async fn clear() -> Result<(), String> {
        match async_fs::remove_file(Self::verifier_path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.to_string()),
        }
    }

    pub fn verifier(&self) -> &str {
        &self.verifier
    }

    fn verifier_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("soniq/state/pkce_verifier");
        path
    }
}
