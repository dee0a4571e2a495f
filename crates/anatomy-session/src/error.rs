use anatomy_core::errors::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("not authenticated: run `anatomy auth login`")]
    NotAuthenticated,

    #[error("session storage error: {0}")]
    Storage(String),

    #[error("corrupt session snapshot: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("keyring error: {0}")]
    Keyring(String),

    /// A sign-in or sign-up attempt that could not complete; carries the
    /// message shown to the user.
    #[error("{0}")]
    Rejected(&'static str),

    #[error(transparent)]
    Core(#[from] CoreError),
}
