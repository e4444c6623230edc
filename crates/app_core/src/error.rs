//! Application error types

use thiserror::Error;

/// Message printed for any recoverable input problem
pub const INVALID_INPUT: &str = "Invalid input";

/// Message printed for any recoverable execution failure
pub const OPERATION_FAILED: &str = "Operation failed";

/// How the dispatcher treats an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed command, bad arity, unresolved path
    InvalidInput,
    /// The handler failed while executing
    OperationFailed,
    /// Startup errors that abort the process
    Fatal,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    // ===== Recoverable Errors (report, continue the loop) =====
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    // ===== Fatal Errors (abort before the loop starts) =====
    #[error("There is no \"--username=Username\" argument given")]
    NoUsernameArgument,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        AppError::InvalidInput(reason.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidInput(_) => ErrorKind::InvalidInput,
            AppError::OperationFailed(_) | AppError::Io(_) => ErrorKind::OperationFailed,
            AppError::NoUsernameArgument | AppError::Config(_) => ErrorKind::Fatal,
        }
    }

    /// Get the single line shown to the user
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::InvalidInput => INVALID_INPUT.to_string(),
            ErrorKind::OperationFailed => OPERATION_FAILED.to_string(),
            ErrorKind::Fatal => self.to_string(),
        }
    }
}

impl From<app_fs::FsError> for AppError {
    fn from(e: app_fs::FsError) -> Self {
        if e.is_resolution() {
            AppError::InvalidInput(e.to_string())
        } else {
            AppError::OperationFailed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_fs_error_classification() {
        let err: AppError = app_fs::FsError::NotFound(PathBuf::from("x")).into();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err: AppError = app_fs::FsError::AlreadyExists(PathBuf::from("x")).into();
        assert_eq!(err.kind(), ErrorKind::OperationFailed);

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = app_fs::FsError::Io(io).into();
        assert_eq!(err.kind(), ErrorKind::OperationFailed);
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(AppError::invalid_input("arity").user_message(), "Invalid input");
        assert_eq!(
            AppError::OperationFailed("boom".into()).user_message(),
            "Operation failed"
        );
        assert_eq!(
            AppError::NoUsernameArgument.user_message(),
            "There is no \"--username=Username\" argument given"
        );
        assert_eq!(AppError::NoUsernameArgument.kind(), ErrorKind::Fatal);
    }
}
