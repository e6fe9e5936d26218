use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid color `{input}`: {reason}")]
    InvalidColor { input: String, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("plugin with id `{0}` is already registered")]
    DuplicatePlugin(String),
}
