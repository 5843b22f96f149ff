pub mod app_supplier;
pub mod config_store;
pub mod event_sink;
pub mod provider_factory;
pub mod remember_issuer;
pub mod session_store;
pub mod token_resolver;

pub use app_supplier::*;
pub use config_store::*;
pub use event_sink::*;
pub use provider_factory::*;
pub use remember_issuer::*;
pub use session_store::*;
pub use token_resolver::*;
