use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatementError {
    #[error("Account master is empty: at least one account entry is required")]
    EmptyAccountMaster,

    #[error("Period axis is empty: at least one elapsed month is required")]
    EmptyPeriodAxis,

    #[error("Ledger row '{account}' (department '{department}') has {actual} period values, expected {expected}")]
    PeriodLengthMismatch {
        account: String,
        department: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid reporting window: {0}")]
    InvalidReportingWindow(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StatementError>;
