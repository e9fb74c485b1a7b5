use thiserror::Error;

/// Outcome of a credential operation that did not succeed.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Please fill in all fields.")]
    Validation,

    #[error("Username '{0}' already exists")]
    DuplicateUsername(String),

    #[error("Invalid username or password.")]
    InvalidCredentials,

    #[error(transparent)]
    Connection(rusqlite::Error),

    #[error(transparent)]
    Storage(#[from] rusqlite::Error),

    #[error("storage worker unavailable")]
    WorkerUnavailable,
}

impl CredentialError {
    /// Anything the user cannot fix by editing the form.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            CredentialError::Connection(_)
                | CredentialError::Storage(_)
                | CredentialError::WorkerUnavailable
        )
    }
}

impl From<actix_web::error::BlockingError> for CredentialError {
    fn from(_: actix_web::error::BlockingError) -> Self {
        CredentialError::WorkerUnavailable
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),
}
