//! Commands and the input line parser

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Every command the file manager understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    // Navigation
    Up,
    Cd,

    // Path operations
    Cat,
    Add,
    Rn,
    Cp,
    Mv,
    Rm,
    Hash,
    Compress,
    Decompress,

    // Info queries
    Ls,
    Os,
    Exit,
}

impl CommandName {
    pub const ALL: [CommandName; 14] = [
        CommandName::Up,
        CommandName::Cd,
        CommandName::Cat,
        CommandName::Add,
        CommandName::Rn,
        CommandName::Cp,
        CommandName::Mv,
        CommandName::Rm,
        CommandName::Hash,
        CommandName::Compress,
        CommandName::Decompress,
        CommandName::Ls,
        CommandName::Os,
        CommandName::Exit,
    ];

    /// The token typed at the prompt
    pub fn as_str(self) -> &'static str {
        match self {
            CommandName::Up => "up",
            CommandName::Cd => "cd",
            CommandName::Cat => "cat",
            CommandName::Add => "add",
            CommandName::Rn => "rn",
            CommandName::Cp => "cp",
            CommandName::Mv => "mv",
            CommandName::Rm => "rm",
            CommandName::Hash => "hash",
            CommandName::Compress => "compress",
            CommandName::Decompress => "decompress",
            CommandName::Ls => "ls",
            CommandName::Os => "os",
            CommandName::Exit => ".exit",
        }
    }

    /// Case-sensitive exact match
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.as_str() == token)
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flags accepted by `os`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsQuery {
    Eol,
    Cpus,
    Homedir,
    Username,
    Architecture,
}

impl OsQuery {
    pub const ALL: [OsQuery; 5] = [
        OsQuery::Eol,
        OsQuery::Cpus,
        OsQuery::Homedir,
        OsQuery::Username,
        OsQuery::Architecture,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OsQuery::Eol => "--EOL",
            OsQuery::Cpus => "--cpus",
            OsQuery::Homedir => "--homedir",
            OsQuery::Username => "--username",
            OsQuery::Architecture => "--architecture",
        }
    }

    pub fn from_flag(flag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|query| query.as_str() == flag)
    }
}

/// One parsed input line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    /// First token; empty for a blank line
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: &str) -> Self {
        self.args.push(arg.to_string());
        self
    }
}

/// Double-quoted, single-quoted, or bare tokens, tried in that order
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]*)"|'([^']*)'|(\S+)"#).expect("token pattern is valid"));

/// Split a raw line into a command name and arguments.
///
/// Whitespace separates tokens except inside a matching pair of single or
/// double quotes, which are stripped. A quote with no closing partner is
/// kept literally as part of a bare token. Never fails.
pub fn parse(line: &str) -> Command {
    let mut tokens = TOKEN_RE.captures_iter(line).filter_map(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))
            .map(|m| m.as_str().to_string())
    });

    let name = tokens.next().unwrap_or_default();
    let command = Command {
        name,
        args: tokens.collect(),
    };

    tracing::debug!("Parsed {:?} -> {:?}", line, command);
    command
}
