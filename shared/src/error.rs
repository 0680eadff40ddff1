use thiserror::Error;

/// Client-side validation failures. The `Display` text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Invalid user.")]
    InvalidUser,
    #[error("Please enter a title.")]
    TitleRequired,
    #[error("Please enter a description.")]
    DescriptionRequired,
    #[error("Please enter a date.")]
    DateRequired,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("task has no identifier")]
    MissingId,
}
