pub mod data_stores;
pub mod events;
pub mod login_token;
pub mod provider;
pub mod provider_id;
pub mod user;
pub mod user_id;

pub use data_stores::*;
pub use events::*;
pub use login_token::*;
pub use provider::*;
pub use provider_id::*;
pub use user::*;
pub use user_id::*;
