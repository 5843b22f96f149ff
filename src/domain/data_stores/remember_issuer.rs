use thiserror::Error;

use crate::domain::User;

#[derive(Error, Debug, PartialEq)]
pub enum RememberIssueError {
    #[error("could not issue remember-device token")]
    UnexpectedError,
}

/// Narrow callback into the session/login subsystem for minting a
/// long-lived "remember this device" token after a successful challenge.
/// Kept this small to avoid a back-reference to the whole session stack.
#[async_trait::async_trait]
pub trait RememberTokenIssuer: Send + Sync {
    async fn issue(&self, user: &User) -> Result<(), RememberIssueError>;
}
