use thiserror::Error;

use super::provider_id::ProviderId;
use super::user::User;

#[derive(Error, Debug, PartialEq)]
pub enum ProviderError {
    #[error("provider backend failure")]
    UnexpectedError,
}

/// One pluggable second-factor method (TOTP, backup codes, ...).
///
/// Implementations are resolved fresh on every registry query and live only
/// for the duration of the call that resolved them. A wrong challenge
/// response is a normal `Ok(false)`, never an error.
#[async_trait::async_trait]
pub trait Provider: Send + Sync {
    fn id(&self) -> &ProviderId;
    fn display_name(&self) -> &str;
    async fn is_enabled_for_user(&self, user: &User) -> Result<bool, ProviderError>;
    async fn verify_challenge(&self, user: &User, challenge: &str) -> Result<bool, ProviderError>;
}
