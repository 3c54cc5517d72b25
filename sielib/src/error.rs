//! Single error type for the public API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SieError {
    #[error("verification <{text}> is not balanced")]
    UnbalancedVerification { text: String },

    #[error("verification date <{date}> is out of bounds")]
    DateOutOfRange { date: String },

    #[error("malformed chart at line {line}: {reason}")]
    MalformedChart { line: usize, reason: &'static str },

    #[error("unexpected account type at line {line}: expected account {expected}, found {found}")]
    MismatchedAccountType {
        line: usize,
        expected: String,
        found: String,
    },

    /// `line` is where the pending `#KONTO` was read.
    #[error("account type missing for '{number}' (#KONTO at line {line})")]
    DanglingAccount { number: String, line: usize },

    #[error("character {character:?} at byte {offset} has no CP437 representation")]
    Encoding { character: char, offset: usize },

    #[error("unable to substitute template key <{{{key}}}>")]
    UnresolvedPlaceholder { key: String },

    #[error("account <{number}> does not exist")]
    UnknownAccount { number: String },

    #[error("invalid template {field} <{value}>, use max {max} characters")]
    FieldLength {
        field: &'static str,
        max: usize,
        value: String,
    },

    #[error("invalid amount <{0}>")]
    InvalidAmount(String),

    #[error("template <{id}> does not exist")]
    TemplateNotFound { id: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Coarse grouping of [`SieError`], for callers that present
/// accounting mistakes differently from damaged files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The data breaks an accounting rule (balance, accounting year).
    Invariant,
    /// The input text is not a valid exchange file.
    Malformed,
    /// The text uses characters outside CP437.
    Encoding,
    /// A template could not be turned into a verification.
    Template,
    Io,
}

impl SieError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SieError::UnbalancedVerification { .. } | SieError::DateOutOfRange { .. } => {
                ErrorCategory::Invariant
            }
            SieError::MalformedChart { .. }
            | SieError::MismatchedAccountType { .. }
            | SieError::DanglingAccount { .. }
            | SieError::Csv(_)
            | SieError::Parse(_) => ErrorCategory::Malformed,
            SieError::Encoding { .. } => ErrorCategory::Encoding,
            SieError::UnresolvedPlaceholder { .. }
            | SieError::UnknownAccount { .. }
            | SieError::FieldLength { .. }
            | SieError::InvalidAmount(_)
            | SieError::TemplateNotFound { .. } => ErrorCategory::Template,
            SieError::Io(_) => ErrorCategory::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, SieError>;
