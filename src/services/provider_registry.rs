use std::collections::HashMap;
use std::sync::Arc;

use crate::app_state::{AppSupplierType, ConfigStoreType, ProviderFactoryType};
use crate::domain::{Provider, ProviderId, User};
use crate::errors::TwoFactorError;
use crate::utils::consts::{CORE_NAMESPACE, TWO_FACTOR_DISABLED_KEY};

/// Resolves the set of second-factor providers applicable to a user.
///
/// Resolution happens in two explicit phases: manifests are enumerated
/// first (a pure read against the app supplier), then every listed provider
/// class is instantiated through the wiring-time factory. Providers are
/// resolved fresh on each query; nothing is cached here.
#[derive(Clone)]
pub struct ProviderRegistry {
    config_store: ConfigStoreType,
    app_supplier: AppSupplierType,
    provider_factory: ProviderFactoryType,
}

impl ProviderRegistry {
    pub fn new(
        config_store: ConfigStoreType,
        app_supplier: AppSupplierType,
        provider_factory: ProviderFactoryType,
    ) -> Self {
        ProviderRegistry {
            config_store,
            app_supplier,
            provider_factory,
        }
    }

    /// Enumerates the user's providers, deduplicated by provider id in
    /// app-enumeration order (a later registration for a colliding id
    /// overwrites the earlier one).
    ///
    /// The backup-codes provider is excluded unless `include_backup` is
    /// set, so it is never offered as a standalone factor by accident.
    /// A single unresolvable provider class fails the whole call: a
    /// half-populated provider set is unsafe to present to a user.
    /// Enabled-filtering runs only after full resolution, so a resolution
    /// failure aborts cleanly either way.
    pub async fn get_providers(
        &self,
        user: &User,
        include_backup: bool,
        enabled_only: bool,
    ) -> Result<HashMap<ProviderId, Arc<dyn Provider>>, TwoFactorError> {
        let apps = self.app_supplier.list_enabled_apps(user).await?;

        // Phase one: collect provider classes, no instantiation yet.
        let mut classes = Vec::new();
        for app in &apps {
            let manifest = self.app_supplier.get_app_manifest(app).await?;
            classes.extend(manifest.two_factor_provider_classes);
        }

        // Phase two: instantiate through the injected factory.
        let mut providers: HashMap<ProviderId, Arc<dyn Provider>> = HashMap::new();
        for class in &classes {
            let provider = self.provider_factory.resolve(class).await?;
            providers.insert(provider.id().clone(), provider);
        }

        if !include_backup {
            providers.remove(&ProviderId::backup_codes());
        }

        if enabled_only {
            let mut enabled = HashMap::new();
            for (id, provider) in providers {
                if provider.is_enabled_for_user(user).await? {
                    enabled.insert(id, provider);
                }
            }
            providers = enabled;
        }

        Ok(providers)
    }

    /// Looks up one provider by id within the user's enabled set. The
    /// backup-codes provider is implicitly included here.
    pub async fn get_provider(
        &self,
        user: &User,
        id: &ProviderId,
    ) -> Result<Option<Arc<dyn Provider>>, TwoFactorError> {
        let mut providers = self.get_providers(user, true, true).await?;
        Ok(providers.remove(id))
    }

    pub async fn get_backup_provider(
        &self,
        user: &User,
    ) -> Result<Option<Arc<dyn Provider>>, TwoFactorError> {
        self.get_provider(user, &ProviderId::backup_codes()).await
    }

    /// True iff the per-user disabled flag is unset and at least one
    /// enabled non-backup provider exists.
    pub async fn is_two_factor_authenticated(&self, user: &User) -> Result<bool, TwoFactorError> {
        let disabled = self
            .config_store
            .read()
            .await
            .get_user_value(&user.uid, CORE_NAMESPACE, TWO_FACTOR_DISABLED_KEY, "0")
            .await?;
        if disabled == "1" {
            return Ok(false);
        }
        let providers = self.get_providers(user, false, true).await?;
        Ok(!providers.is_empty())
    }

    pub async fn enable_two_factor_authentication(
        &self,
        user: &User,
    ) -> Result<(), TwoFactorError> {
        self.config_store
            .write()
            .await
            .delete_user_value(&user.uid, CORE_NAMESPACE, TWO_FACTOR_DISABLED_KEY)
            .await?;
        Ok(())
    }

    pub async fn disable_two_factor_authentication(
        &self,
        user: &User,
    ) -> Result<(), TwoFactorError> {
        self.config_store
            .write()
            .await
            .set_user_value(&user.uid, CORE_NAMESPACE, TWO_FACTOR_DISABLED_KEY, "1")
            .await?;
        Ok(())
    }
}
