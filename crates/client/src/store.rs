//! Bearer-token persistence between client runs.
//!
//! The token is written as plain text to a single file so a restarted
//! client can resume its session until the token expires.

use std::io;
use std::path::{Path, PathBuf};

/// Default token file, relative to the working directory.
const DEFAULT_TOKEN_FILE: &str = ".shelf_token";

/// File-backed storage for the session token.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Build a store at the path from `SHELF_TOKEN_FILE`, falling back to
    /// `.shelf_token`.
    pub fn from_env() -> Self {
        let path =
            std::env::var("SHELF_TOKEN_FILE").unwrap_or_else(|_| DEFAULT_TOKEN_FILE.into());
        Self::new(path)
    }

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored token. Returns `None` if the file is missing,
    /// unreadable, or holds only whitespace.
    pub fn load(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    /// Persist a token, replacing any previous one.
    pub fn save(&self, token: &str) -> io::Result<()> {
        std::fs::write(&self.path, token)
    }

    /// Remove the stored token. A missing file is not an error.
    pub fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
