use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// grades 1 and 2 are not modelled
    #[error("quality {0} is not one of 0, 3, 4, 5")]
    InvalidQuality(u8),

    #[error("unknown grade {0:?}, expected again, hard, good or easy")]
    UnknownGrade(String),

    #[error("{0} is not in the deck")]
    UnknownWord(String),

    #[error("no local data directory on this platform")]
    NoDataDir,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
