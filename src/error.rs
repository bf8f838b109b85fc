pub type FlipbookResult<T> = Result<T, FlipbookError>;

#[derive(thiserror::Error, Debug)]
pub enum FlipbookError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("directory access error: {0}")]
    DirectoryAccess(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("frame mismatch error: {0}")]
    FrameMismatch(String),

    #[error("output write error: {0}")]
    OutputWrite(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlipbookError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn directory_access(msg: impl Into<String>) -> Self {
        Self::DirectoryAccess(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn frame_mismatch(msg: impl Into<String>) -> Self {
        Self::FrameMismatch(msg.into())
    }

    pub fn output_write(msg: impl Into<String>) -> Self {
        Self::OutputWrite(msg.into())
    }
}
