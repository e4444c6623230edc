//! Static table of supported operations

use crate::command::CommandName;

/// Family a command belongs to.
///
/// Only used to label commands in logs. Argument checks come from [`Arity`]
/// and the handler itself decides how paths resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Moves the session (`up`, `cd`)
    Navigation,
    /// Acts on a resolved file or directory argument
    PathOperation,
    /// Reads and prints without side effects (`ls`, `os`, `.exit`)
    InfoQuery,
}

/// How many argument tokens a command takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    /// Tokens are joined back into one space-separated path
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

/// One row of the operation table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisteredOperation {
    pub name: CommandName,
    /// Log label, see [`OperationKind`]
    pub kind: OperationKind,
    pub arity: Arity,
}

impl RegisteredOperation {
    const fn new(name: CommandName, kind: OperationKind, arity: Arity) -> Self {
        Self { name, kind, arity }
    }
}

const OPERATIONS: [RegisteredOperation; 14] = {
    use crate::command::CommandName as C;
    use crate::registry::Arity::*;
    use crate::registry::OperationKind::*;

    [
        RegisteredOperation::new(C::Up, Navigation, Exactly(0)),
        RegisteredOperation::new(C::Cd, Navigation, AtLeast(1)),
        RegisteredOperation::new(C::Cat, PathOperation, Exactly(1)),
        RegisteredOperation::new(C::Add, PathOperation, Exactly(1)),
        RegisteredOperation::new(C::Rn, PathOperation, Exactly(2)),
        RegisteredOperation::new(C::Cp, PathOperation, Exactly(2)),
        RegisteredOperation::new(C::Mv, PathOperation, Exactly(2)),
        RegisteredOperation::new(C::Rm, PathOperation, Exactly(1)),
        RegisteredOperation::new(C::Hash, PathOperation, Exactly(1)),
        RegisteredOperation::new(C::Compress, PathOperation, Exactly(2)),
        RegisteredOperation::new(C::Decompress, PathOperation, Exactly(2)),
        RegisteredOperation::new(C::Ls, InfoQuery, Exactly(0)),
        RegisteredOperation::new(C::Os, InfoQuery, Exactly(1)),
        RegisteredOperation::new(C::Exit, InfoQuery, Exactly(0)),
    ]
};

/// Lookup from command token to operation, immutable after construction
#[derive(Debug, Clone, Copy)]
pub struct OperationRegistry {
    operations: &'static [RegisteredOperation],
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self {
            operations: &OPERATIONS,
        }
    }

    /// Case-sensitive exact lookup
    pub fn lookup(&self, token: &str) -> Option<&'static RegisteredOperation> {
        let name = CommandName::from_token(token)?;
        self.operations.iter().find(|op| op.name == name)
    }

    pub fn operations(&self) -> &'static [RegisteredOperation] {
        self.operations
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_command_registered_once() {
        let registry = OperationRegistry::new();
        for name in CommandName::ALL {
            let count = registry.operations().iter().filter(|op| op.name == name).count();
            assert_eq!(count, 1, "{} registered {} times", name, count);
        }
    }

    #[test]
    fn test_lookup() {
        let registry = OperationRegistry::new();

        let cd = registry.lookup("cd").unwrap();
        assert_eq!(cd.kind, OperationKind::Navigation);
        assert!(cd.arity.accepts(3));
        assert!(!cd.arity.accepts(0));

        let rn = registry.lookup("rn").unwrap();
        assert_eq!(rn.kind, OperationKind::PathOperation);
        assert!(rn.arity.accepts(2));
        assert!(!rn.arity.accepts(3));

        assert_eq!(registry.lookup("os").unwrap().kind, OperationKind::InfoQuery);
        assert!(registry.lookup("Cd").is_none());
        assert!(registry.lookup("").is_none());
    }
}
