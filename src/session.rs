use std::path::{Path, PathBuf};

use crate::error::ShellError;

/// Per-process session state: who the shell is talking to and where home
/// is. Built once at startup and passed by reference into the shell and
/// the command handlers.
pub struct Session {
    username: Option<String>,
    home: PathBuf,
}

impl Session {
    pub fn new(username: Option<String>) -> Result<Self, ShellError> {
        let home = dirs::home_dir().ok_or(ShellError::HomeDirNotFound)?;
        Ok(Session { username, home })
    }

    /// The name used in the greeting and farewell lines.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("anonymous")
    }

    pub fn home(&self) -> &Path {
        &self.home
    }
}
