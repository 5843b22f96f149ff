use std::sync::Arc;

use thiserror::Error;

use crate::domain::Provider;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("could not resolve two-factor provider class {class}")]
pub struct ProviderResolutionError {
    pub class: String,
}

/// Constructor-injected mapping from provider class identifier to provider
/// instance, built once at host-application wiring time. A resolution
/// failure aborts the whole enumeration it occurs in: a half-populated
/// provider set must never be offered to a user.
#[async_trait::async_trait]
pub trait ProviderFactory: Send + Sync {
    async fn resolve(&self, class: &str) -> Result<Arc<dyn Provider>, ProviderResolutionError>;
}
