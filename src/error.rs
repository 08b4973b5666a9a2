use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No movement table on the page for month id {0}")]
    MissingTable(String),

    #[error("Unknown month id: {0}")]
    UnknownMonth(String),

    #[error("Category config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
