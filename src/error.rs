use thiserror::Error;

pub type MapViewResult<T> = Result<T, MapViewError>;

#[derive(Debug, Error)]
pub enum MapViewError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("dataset load failed: {0}")]
    Dataset(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
