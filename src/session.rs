use std::fs;
use std::path::PathBuf;

use crate::error::Result;
use crate::models::User;

/// Opaque key-value persistence for the logged-in user, surviving
/// process restarts. The ledger never reads it; only the presentation
/// layer does, to restore a session at startup.
pub trait SessionStore {
    /// Remember `user` as the current session
    fn save(&mut self, user: &User) -> Result<()>;

    /// The remembered user, or `None` when no session is stored
    fn load(&self) -> Result<Option<User>>;

    /// Forget the current session (logout)
    fn clear(&mut self) -> Result<()>;
}

/// JSON-file session store
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn save(&mut self, user: &User) -> Result<()> {
        let json = serde_json::to_string(user)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<User>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn clear(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
