pub mod event_sinks;
pub mod hashmap_config_store;
pub mod hashmap_session_store;
pub mod hashmap_token_resolver;
pub mod mock_remember_issuer;
pub mod static_app_supplier;
pub mod static_provider_factory;

pub use event_sinks::*;
pub use hashmap_config_store::*;
pub use hashmap_session_store::*;
pub use hashmap_token_resolver::*;
pub use mock_remember_issuer::*;
pub use static_app_supplier::*;
pub use static_provider_factory::*;
