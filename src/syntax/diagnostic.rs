//! Diagnostics produced while parsing a command line.

use std::fmt;
use std::sync::Arc;

use crate::base::TextRange;

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// A diagnostic message with its range inside the line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub range: TextRange,
    pub severity: Severity,
    pub message: Arc<str>,
}

impl Diagnostic {
    pub fn error(range: TextRange, message: impl Into<Arc<str>>) -> Self {
        Self {
            range,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(range: TextRange, message: impl Into<Arc<str>>) -> Self {
        Self {
            range,
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity.as_str(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )
    }
}
