use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank is empty")]
    Empty,
    #[error("question bank has {questions} questions but {rules} rules")]
    LengthMismatch { questions: usize, rules: usize },
    #[error("shuffle plan has {plan} entries for {questions} questions")]
    PlanMismatch { questions: usize, plan: usize },
}

/// Errors from a `ResultStore` backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
    #[error("could not prepare store location: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while publishing a quiz result.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HandoffError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("could not encode quiz result: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("TIKIRI_SEED must be an unsigned integer, got {0:?}")]
    InvalidSeed(String),
    #[error("TIKIRI_ROUTE must be `quiz` or `result`, got {0:?}")]
    InvalidRoute(String),
}
