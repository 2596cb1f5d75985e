use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("sign-in failed: {0}")]
    SignInFailed(String),

    #[error("sign-up failed: {0}")]
    SignUpFailed(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("{0}")]
    Other(String),
}
