use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::{Mutex, RwLock};

use twofactor::app_state::AppState;
use twofactor::domain::{
    ActivityPublisher, AppId, AppManifest, AuditEvent, AuditPublishError, EventDispatcher,
    LoginToken, Provider, ProviderError, ProviderId, User, UserId,
};
use twofactor::services::data_stores::{
    HashmapConfigStore, HashmapSessionStore, HashmapTokenResolver, MockRememberIssuer,
    StaticAppSupplier, StaticProviderFactory,
};
use twofactor::TwoFactorManager;

pub const SESSION_ID: &str = "test-session";
pub const TOKEN_ID: &str = "token-1";

pub struct StubProvider {
    id: ProviderId,
    display_name: String,
    enabled: AtomicBool,
    accept: String,
}

impl StubProvider {
    pub fn new(id: &str, display_name: &str, accept: &str) -> Arc<Self> {
        Arc::new(StubProvider {
            id: ProviderId::new(id),
            display_name: display_name.to_string(),
            enabled: AtomicBool::new(true),
            accept: accept.to_string(),
        })
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl Provider for StubProvider {
    fn id(&self) -> &ProviderId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    async fn is_enabled_for_user(&self, _user: &User) -> Result<bool, ProviderError> {
        Ok(self.enabled.load(Ordering::SeqCst))
    }

    async fn verify_challenge(&self, _user: &User, challenge: &str) -> Result<bool, ProviderError> {
        Ok(challenge == self.accept)
    }
}

#[derive(Default)]
pub struct RecordingActivityPublisher {
    events: Mutex<Vec<AuditEvent>>,
}

impl RecordingActivityPublisher {
    pub async fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl ActivityPublisher for RecordingActivityPublisher {
    async fn publish(&self, event: AuditEvent) -> Result<(), AuditPublishError> {
        self.events.lock().await.push(event);
        Ok(())
    }
}

pub struct FailingActivityPublisher;

#[async_trait::async_trait]
impl ActivityPublisher for FailingActivityPublisher {
    async fn publish(&self, _event: AuditEvent) -> Result<(), AuditPublishError> {
        Err(AuditPublishError::UnexpectedError)
    }
}

#[derive(Default)]
pub struct RecordingEventDispatcher {
    events: Mutex<Vec<(String, Value)>>,
}

impl RecordingEventDispatcher {
    pub async fn events(&self) -> Vec<(String, Value)> {
        self.events.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl EventDispatcher for RecordingEventDispatcher {
    async fn dispatch(&self, event_name: &str, payload: Value) {
        self.events
            .lock()
            .await
            .push((event_name.to_string(), payload));
    }
}

pub struct TestApp {
    pub manager: TwoFactorManager,
    pub session_store: Arc<RwLock<HashmapSessionStore>>,
    pub config_store: Arc<RwLock<HashmapConfigStore>>,
    pub activity: Arc<RecordingActivityPublisher>,
    pub dispatcher: Arc<RecordingEventDispatcher>,
    pub remember: Arc<MockRememberIssuer>,
}

impl TestApp {
    /// Fully wired in-memory app: one auth app contributing the given
    /// providers, a session whose login token resolves to `TOKEN_ID`.
    pub fn new(providers: Vec<Arc<StubProvider>>) -> Self {
        Self::build(providers, true, None)
    }

    /// Same wiring, but the session's login token does not resolve.
    pub fn with_unresolvable_token(providers: Vec<Arc<StubProvider>>) -> Self {
        Self::build(providers, false, None)
    }

    pub fn with_activity_publisher(
        providers: Vec<Arc<StubProvider>>,
        publisher: Arc<dyn ActivityPublisher>,
    ) -> Self {
        Self::build(providers, true, Some(publisher))
    }

    fn build(
        providers: Vec<Arc<StubProvider>>,
        token_resolvable: bool,
        publisher: Option<Arc<dyn ActivityPublisher>>,
    ) -> Self {
        let app = AppId::new("auth_app");
        let classes = providers
            .iter()
            .map(|p| format!("{}_class", p.id().as_ref()))
            .collect();
        let mut supplier = StaticAppSupplier::default()
            .with_app(
                app.clone(),
                AppManifest {
                    two_factor_provider_classes: classes,
                },
            )
            .enabled_for("alice", app.clone());
        supplier = supplier.enabled_for("bob", app);

        let mut factory = StaticProviderFactory::default();
        for provider in providers {
            let class = format!("{}_class", provider.id().as_ref());
            factory = factory.with_provider(class, provider);
        }

        let mut resolver = HashmapTokenResolver::default();
        if token_resolvable {
            resolver = resolver.with_token(SESSION_ID, LoginToken::new(TOKEN_ID));
        }

        let session_store = Arc::new(RwLock::new(HashmapSessionStore::new(
            SESSION_ID.to_string(),
        )));
        let config_store = Arc::new(RwLock::new(HashmapConfigStore::default()));
        let activity = Arc::new(RecordingActivityPublisher::default());
        let dispatcher = Arc::new(RecordingEventDispatcher::default());
        let remember = Arc::new(MockRememberIssuer::default());

        let state = AppState::new(
            config_store.clone(),
            session_store.clone(),
            Arc::new(resolver),
            Arc::new(supplier),
            Arc::new(factory),
            remember.clone(),
            publisher.unwrap_or_else(|| activity.clone() as Arc<dyn ActivityPublisher>),
            dispatcher.clone(),
        );

        TestApp {
            manager: TwoFactorManager::new(state),
            session_store,
            config_store,
            activity,
            dispatcher,
            remember,
        }
    }
}

pub fn test_user(uid: &str) -> User {
    User::new(UserId::parse(uid.to_string()).unwrap(), uid.to_string())
}

pub fn totp_provider() -> Arc<StubProvider> {
    StubProvider::new("totp", "TOTP", "123456")
}
