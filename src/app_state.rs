use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{
    ActivityPublisher, AppSupplier, EventDispatcher, LoginTokenResolver, ProviderFactory,
    RememberTokenIssuer, SessionStore, UserConfigStore,
};

// Using type aliases to improve readability!
pub type ConfigStoreType = Arc<RwLock<dyn UserConfigStore>>;
pub type SessionStoreType = Arc<RwLock<dyn SessionStore>>;
pub type TokenResolverType = Arc<dyn LoginTokenResolver>;
pub type AppSupplierType = Arc<dyn AppSupplier>;
pub type ProviderFactoryType = Arc<dyn ProviderFactory>;
pub type RememberIssuerType = Arc<dyn RememberTokenIssuer>;
pub type ActivityPublisherType = Arc<dyn ActivityPublisher>;
pub type EventDispatcherType = Arc<dyn EventDispatcher>;

/// Collaborators the host application wires up once and hands to
/// [`crate::TwoFactorManager`].
#[derive(Clone)]
pub struct AppState {
    pub config_store: ConfigStoreType,
    pub session_store: SessionStoreType,
    pub token_resolver: TokenResolverType,
    pub app_supplier: AppSupplierType,
    pub provider_factory: ProviderFactoryType,
    pub remember_issuer: RememberIssuerType,
    pub activity_publisher: ActivityPublisherType,
    pub event_dispatcher: EventDispatcherType,
}

#[allow(clippy::too_many_arguments)]
impl AppState {
    pub fn new(
        config_store: ConfigStoreType,
        session_store: SessionStoreType,
        token_resolver: TokenResolverType,
        app_supplier: AppSupplierType,
        provider_factory: ProviderFactoryType,
        remember_issuer: RememberIssuerType,
        activity_publisher: ActivityPublisherType,
        event_dispatcher: EventDispatcherType,
    ) -> Self {
        Self {
            config_store,
            session_store,
            token_resolver,
            app_supplier,
            provider_factory,
            remember_issuer,
            activity_publisher,
            event_dispatcher,
        }
    }
}
