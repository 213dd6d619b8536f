use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("'data' cannot be null or empty")]
    EmptyData,

    #[error("'encoded_data' is not a valid Base64Url string")]
    InvalidBase64Url,
}

impl CodecError {
    /// Every codec failure is a rejected argument; nothing is transient or retryable.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CodecError::EmptyData | CodecError::InvalidBase64Url)
    }
}
