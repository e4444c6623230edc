//! Command dispatcher: parse, validate, execute, report

use crate::command::{self, CommandName, OsQuery};
use crate::error::INVALID_INPUT;
use crate::registry::{OperationRegistry, RegisteredOperation};
use crate::{navigation, operations, os_info};
use crate::{AppConfig, AppError, Console, ErrorKind, Session};
use app_fs::ListOptions;
use std::io;
use tokio::io::AsyncWrite;

/// What happened to one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Handler ran and succeeded
    Completed,
    /// Handler ran (or its arguments were checked) and failed
    Failed(ErrorKind),
    /// Unknown command; no handler ran
    Rejected,
    /// `.exit` was requested
    Exit,
}

impl Outcome {
    pub fn is_exit(self) -> bool {
        self == Outcome::Exit
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Routes each input line to its handler and reports the resulting state
pub struct Dispatcher {
    registry: OperationRegistry,
    list_options: ListOptions,
    compression_quality: u32,
}

impl Dispatcher {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            registry: OperationRegistry::new(),
            list_options: config.list_options(),
            compression_quality: config.compression_quality(),
        }
    }

    /// Run one input line to completion.
    ///
    /// Every command that reaches a handler is followed by exactly one
    /// directory report, whether it succeeded or failed. Unknown commands
    /// are rejected without running anything but still get the report.
    /// `.exit` returns [`Outcome::Exit`] with no report. Only failures to
    /// write to the console itself are returned as errors.
    pub async fn dispatch<O, E>(
        &self,
        session: &mut Session,
        line: &str,
        console: &mut Console<O, E>,
    ) -> io::Result<Outcome>
    where
        O: AsyncWrite + Unpin,
        E: AsyncWrite + Unpin,
    {
        let command = command::parse(line);

        let Some(operation) = self.registry.lookup(&command.name) else {
            tracing::warn!("Unknown command: {:?}", command.name);
            console.error(INVALID_INPUT).await?;
            console.line(&session.location_line()).await?;
            return Ok(Outcome::Rejected);
        };

        let outcome = match self.execute(operation, session, &command.args, console).await {
            Ok(Flow::Exit) => return Ok(Outcome::Exit),
            Ok(Flow::Continue) => Outcome::Completed,
            Err(e) => {
                tracing::warn!("{} failed: {}", operation.name, e);
                console.error(&e.user_message()).await?;
                Outcome::Failed(e.kind())
            }
        };

        console.line(&session.location_line()).await?;
        Ok(outcome)
    }

    async fn execute<O, E>(
        &self,
        operation: &RegisteredOperation,
        session: &mut Session,
        args: &[String],
        console: &mut Console<O, E>,
    ) -> Result<Flow, AppError>
    where
        O: AsyncWrite + Unpin,
        E: AsyncWrite + Unpin,
    {
        if !operation.arity.accepts(args.len()) {
            return Err(AppError::invalid_input(format!(
                "{} takes {:?} arguments, got {}",
                operation.name,
                operation.arity,
                args.len()
            )));
        }

        tracing::debug!("Executing {} ({:?}) with {:?}", operation.name, operation.kind, args);

        match operation.name {
            CommandName::Up => navigation::up(session).await?,
            CommandName::Cd => navigation::cd(session, args).await?,
            CommandName::Ls => operations::ls(session, &self.list_options, console).await?,
            CommandName::Cat => operations::cat(session, &args[0], console).await?,
            CommandName::Add => operations::add(session, &args[0]).await?,
            CommandName::Rn => operations::rn(session, &args[0], &args[1]).await?,
            CommandName::Cp => operations::copy(session, &args[0], &args[1], false).await?,
            CommandName::Mv => operations::copy(session, &args[0], &args[1], true).await?,
            CommandName::Rm => operations::rm(session, &args[0]).await?,
            CommandName::Hash => operations::hash(session, &args[0], console).await?,
            CommandName::Compress => {
                operations::compress(session, &args[0], &args[1], self.compression_quality).await?
            }
            CommandName::Decompress => {
                operations::decompress(session, &args[0], &args[1]).await?
            }
            CommandName::Os => {
                let query = OsQuery::from_flag(&args[0])
                    .ok_or_else(|| AppError::invalid_input(format!("unknown os flag {:?}", args[0])))?;
                for line in os_info::describe(query)? {
                    console.line(&line).await?;
                }
            }
            CommandName::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }
}
