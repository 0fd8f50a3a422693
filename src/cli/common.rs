//! Shared types for CLI command handlers.

use std::fmt;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Error category, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Semantic failure (exit code 1)
    Validation,
    /// I/O or parse failure (exit code 2)
    Io,
}

/// A CLI command failure with its exit code category.
#[derive(Debug, Clone)]
pub struct CliError {
    kind: CliErrorKind,
    message: String,
}

impl CliError {
    /// A semantic failure (exit code 1).
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// An I/O or parse failure (exit code 2).
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// The process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self.kind {
            CliErrorKind::Validation => 1,
            CliErrorKind::Io => 2,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("v").exit_code(), 1);
        assert_eq!(CliError::io("i").exit_code(), 2);
    }
}
