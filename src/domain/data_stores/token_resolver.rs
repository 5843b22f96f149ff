use thiserror::Error;

use crate::domain::LoginToken;

#[derive(Error, Debug, PartialEq)]
pub enum TokenResolveError {
    #[error("login token is invalid or expired")]
    InvalidToken,
    #[error("token resolver failure")]
    UnexpectedError,
}

/// Maps a live session identifier to its persisted login token.
///
/// `InvalidToken` is recovered by callers: an unresolvable token is treated
/// as carrying no outstanding two-factor requirement (fail-open, so that a
/// rotated or expired token can never lock a user out permanently).
#[async_trait::async_trait]
pub trait LoginTokenResolver: Send + Sync {
    async fn token_for_session(&self, session_id: &str) -> Result<LoginToken, TokenResolveError>;
}
