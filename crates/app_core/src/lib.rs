//! File Manager Core Domain Logic
//!
//! This crate contains:
//! - Session state
//! - Command parsing and the operation registry
//! - The dispatcher that runs each input line
//! - The line reader feeding it
//! - Command handlers
//! - Configuration
//! - Error types

pub mod session;
pub mod config;
pub mod command;
pub mod registry;
pub mod dispatcher;
pub mod error;
pub mod console;
pub mod input;
pub mod navigation;
pub mod operations;
pub mod os_info;
pub mod exit_hook;

pub use session::Session;
pub use config::{AppConfig, CompressionConfig, GeneralConfig, ListingConfig, SortBy};
pub use command::{parse, Command, CommandName, OsQuery};
pub use registry::{Arity, OperationKind, OperationRegistry, RegisteredOperation};
pub use dispatcher::{Dispatcher, Outcome};
pub use error::{AppError, ErrorKind};
pub use console::{Console, StdConsole};
pub use input::LineReader;
pub use exit_hook::Farewell;
