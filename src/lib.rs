//! Two-factor authentication orchestration.
//!
//! This crate sits between "user entered password correctly" and "user is
//! fully authenticated". It decides whether a second factor is still owed
//! for a session, resolves the challenge providers a user may pick from,
//! runs the challenge-verification protocol with its side effects, and
//! keeps the session/token bookkeeping that makes the decision idempotent.
//!
//! All collaborators (config store, session store, token resolver, app
//! supplier, provider factory, event sinks) are injected as trait objects
//! through [`app_state::AppState`]; in-memory implementations suitable for
//! wiring and tests live in [`services::data_stores`].

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod services;
pub mod utils;

pub use errors::TwoFactorError;
pub use services::{
    PendingLoginTokenLedger, ProviderRegistry, SessionStateTracker, TwoFactorManager,
};
