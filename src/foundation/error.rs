pub type RadarResult<T> = Result<T, RadarError>;

#[derive(thiserror::Error, Debug)]
pub enum RadarError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RadarError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
