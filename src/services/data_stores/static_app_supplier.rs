use std::collections::HashMap;

use crate::domain::{AppId, AppManifest, AppSupplier, AppSupplierError, User};

/// In-memory app table: a manifest per registered app plus a per-user
/// enablement list. Enumeration order is the registration order of the
/// enablement entries and is not re-sorted.
#[derive(Default)]
pub struct StaticAppSupplier {
    manifests: HashMap<AppId, AppManifest>,
    enabled: HashMap<String, Vec<AppId>>,
}

impl StaticAppSupplier {
    pub fn with_app(mut self, app: AppId, manifest: AppManifest) -> Self {
        self.manifests.insert(app, manifest);
        self
    }

    pub fn enabled_for(mut self, uid: impl Into<String>, app: AppId) -> Self {
        self.enabled.entry(uid.into()).or_default().push(app);
        self
    }
}

#[async_trait::async_trait]
impl AppSupplier for StaticAppSupplier {
    async fn list_enabled_apps(&self, user: &User) -> Result<Vec<AppId>, AppSupplierError> {
        Ok(self
            .enabled
            .get(user.uid.as_ref())
            .cloned()
            .unwrap_or_default())
    }

    async fn get_app_manifest(&self, app: &AppId) -> Result<AppManifest, AppSupplierError> {
        self.manifests
            .get(app)
            .cloned()
            .ok_or_else(|| AppSupplierError::AppNotFound(app.as_ref().to_string()))
    }
}
