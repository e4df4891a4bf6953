use std::path::PathBuf;

use crate::types::{Token, TokenProvenance};

/// Owns the persisted bearer token. At most one token is current at a time;
/// a new exchange overwrites the file, logout removes it. There is no
/// refresh handling: once the token expires, catalog calls fail and the
/// user runs `soniq auth` again.
pub struct TokenManager {
    token: Token,
    provenance: TokenProvenance,
}

impl TokenManager {
    /// Wraps a token freshly obtained from a code exchange.
    pub fn new(token: Token) -> Self {
        TokenManager {
            token,
            provenance: TokenProvenance::Exchanged,
        }
    }

    /// Loads the cached token from disk. Errors when no token is stored,
    /// which callers treat as "not authenticated".
    pub async fn load() -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self {
            token,
            provenance: TokenProvenance::Cached,
        })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(Self::token_path(), json)
            .await
            .map_err(|e| e.to_string())
    }

    /// Removes the stored token. Idempotent: a missing file is fine.
    pub async fn clear() -> Result<(), String> {
        match async_fs::remove_file(Self::token_path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.to_string()),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }

    pub fn provenance(&self) -> TokenProvenance {
        self.provenance
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("soniq/cache/token.json");
        path
    }
}
