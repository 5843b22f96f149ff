use thiserror::Error;

use crate::domain::User;

#[derive(PartialEq, Debug, Clone, Eq, Hash)]
pub struct AppId(String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Self {
        AppId(id.into())
    }
}

impl AsRef<str> for AppId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The two-factor related portion of an app manifest: the provider class
/// identifiers the app contributes.
#[derive(Debug, Clone, PartialEq)]
pub struct AppManifest {
    pub two_factor_provider_classes: Vec<String>,
}

#[derive(Error, Debug, PartialEq)]
pub enum AppSupplierError {
    #[error("app {0} is not known")]
    AppNotFound(String),
    #[error("app supplier failure")]
    UnexpectedError,
}

/// External app/plugin mechanism. Reading a manifest is a pure lookup with
/// no loading side effects; provider instantiation happens separately
/// through the `ProviderFactory`.
#[async_trait::async_trait]
pub trait AppSupplier: Send + Sync {
    async fn list_enabled_apps(&self, user: &User) -> Result<Vec<AppId>, AppSupplierError>;
    async fn get_app_manifest(&self, app: &AppId) -> Result<AppManifest, AppSupplierError>;
}
