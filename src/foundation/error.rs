pub type CamoResult<T> = Result<T, CamoError>;

#[derive(thiserror::Error, Debug)]
pub enum CamoError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("empty mask: {0}")]
    EmptyMask(String),

    #[error("invalid range: {0}")]
    InvalidRange(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CamoError {
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    pub fn empty_mask(msg: impl Into<String>) -> Self {
        Self::EmptyMask(msg.into())
    }

    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
