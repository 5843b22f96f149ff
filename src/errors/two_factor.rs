use thiserror::Error;

use crate::domain::{
    AppSupplierError, ConfigStoreError, ProviderError, ProviderResolutionError, SessionStoreError,
    TokenResolveError,
};

/// Failures surfaced to the host application.
///
/// A wrong challenge response or an unknown provider id is never an error;
/// those are ordinary `false`/`None` outcomes. This type covers the hard
/// failures: provider resolution, collaborator store access, and
/// non-recoverable token resolution.
#[derive(Error, Debug, PartialEq)]
pub enum TwoFactorError {
    #[error(transparent)]
    ProviderResolution(#[from] ProviderResolutionError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    App(#[from] AppSupplierError),

    #[error(transparent)]
    ConfigStore(#[from] ConfigStoreError),

    #[error(transparent)]
    SessionStore(#[from] SessionStoreError),

    #[error(transparent)]
    TokenResolve(#[from] TokenResolveError),
}
