//! Session state: working directory and user identity

use crate::AppError;
use std::path::{Path, PathBuf};

/// State that lives for the whole interactive session
#[derive(Debug, Clone)]
pub struct Session {
    /// Always an existing directory between commands
    current_dir: PathBuf,

    /// Name given with `--username=`
    user_name: String,
}

impl Session {
    /// Create a session rooted at `start_dir`, which must be an existing directory
    pub fn new(user_name: impl Into<String>, start_dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let user_name = user_name.into();
        if user_name.is_empty() {
            return Err(AppError::NoUsernameArgument);
        }

        let start_dir = app_fs::absolute(start_dir.into())?;
        if !start_dir.is_dir() {
            return Err(AppError::Config(format!(
                "start directory {} is not a directory",
                start_dir.display()
            )));
        }

        Ok(Self {
            current_dir: start_dir,
            user_name,
        })
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Only navigation handlers move the session, and only to a resolved directory
    pub(crate) fn set_current_dir(&mut self, dir: PathBuf) {
        tracing::debug!("Working directory: {} -> {}", self.current_dir.display(), dir.display());
        self.current_dir = dir;
    }

    /// The directory report printed after every accepted command
    pub fn location_line(&self) -> String {
        format!("You are currently in {}", self.current_dir.display())
    }
}
