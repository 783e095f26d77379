use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Total credits cannot be zero.")]
    ZeroTotalCredits,

    #[error("Credit totals are too large to average")]
    TotalsOutOfRange,

    #[error("Invalid credit hours: {0}")]
    InvalidCredit(String),

    #[error("Credit hours cannot be negative: {0}")]
    NegativeCredit(f64),

    #[error("Invalid number of subjects: {0}")]
    InvalidSubjectCount(String),

    #[error("Too many invalid attempts while reading {field} ({attempts} attempts)")]
    TooManyAttempts { field: &'static str, attempts: u32 },

    #[error("Input ended while reading {0}")]
    UnexpectedEof(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
