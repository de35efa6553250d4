use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing control: {0}")]
    MissingControl(String),

    #[error("Control {id} holds a {actual} value, expected {expected}")]
    ControlKindMismatch {
        id: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Invalid display mode: {0}")]
    InvalidDisplayMode(String),

    #[error("Invalid difficulty: {0}")]
    InvalidDifficulty(String),

    #[error("Invalid sort column: {0}")]
    InvalidSortColumn(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.message().to_string())
    }
}
