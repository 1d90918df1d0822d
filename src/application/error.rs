use thiserror::Error;

use crate::domain::{EntryKind, ParseCentsError};

/// Rejected user input. Nothing is written to the ledger when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a description")]
    EmptyDescription,

    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount {
        input: String,
        reason: ParseCentsError,
    },

    #[error("Amount must be greater than zero, got '{0}'")]
    NonPositiveAmount(String),

    #[error("Amount '{0}' exceeds the maximum of $1,000,000,000,000.00")]
    AmountTooLarge(String),

    #[error("Total {0} is too large to add another entry")]
    TotalTooLarge(EntryKind),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Unknown entry kind: {0} (expected income or expense)")]
    UnknownKind(String),

    #[error("Unknown command: {0} (try 'help')")]
    UnknownCommand(String),

    #[error("Invalid entry id: {0}")]
    InvalidId(String),
}
