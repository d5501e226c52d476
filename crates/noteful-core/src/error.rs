//! Validation errors for request inputs.

use thiserror::Error;

/// Reasons a request input is rejected before it reaches the store.
///
/// The `Display` text is the message sent to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `folder_name` was absent, null, or empty on folder creation.
    #[error("Invalid folder name")]
    InvalidFolderName,

    /// A required note field was absent or null.
    #[error("Missing '{0}' in request body")]
    MissingField(&'static str),

    /// A partial update carried no usable value.
    #[error("Request body needs a valid value")]
    EmptyUpdate,
}
