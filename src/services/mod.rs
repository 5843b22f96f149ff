pub mod data_stores;
pub mod pending_token_ledger;
pub mod provider_registry;
pub mod session_state_tracker;
pub mod two_factor_manager;

pub use pending_token_ledger::*;
pub use provider_registry::*;
pub use session_state_tracker::*;
pub use two_factor_manager::*;
