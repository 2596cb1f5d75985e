//! Error types for the summarization pipeline.

use thiserror::Error;

/// Errors from summarizing and persisting regulatory updates.
#[derive(Debug, Error)]
pub enum AiError {
    /// Update text was empty. No request is made.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The configured API key environment variable is unset or empty.
    #[error("missing api key: environment variable {0} is not set")]
    MissingApiKey(String),

    /// The provider client could not be constructed.
    #[error("provider client error: {0}")]
    Client(String),

    /// The completion request itself failed.
    #[error("completion request failed: {0}")]
    Completion(String),

    /// The model reply was not the expected JSON shape.
    #[error("unusable model reply: {0}")]
    InvalidReply(String),

    /// Error from the libSQL storage layer while persisting the result.
    #[error("database error: {0}")]
    Db(#[from] regu_db::error::DbError),
}
