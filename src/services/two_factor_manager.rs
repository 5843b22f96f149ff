/// Two-factor challenge orchestration.
///
/// This module provides the `TwoFactorManager`, which coordinates:
/// - The per-request decision whether a second factor is still owed
/// - Marking a login attempt as awaiting its challenge
/// - Running a challenge verification with its session/ledger side effects
/// - Provider lookup and the per-user enable/disable toggle
///
/// Security model:
/// 1. The persistent token ledger, not the session, is the source of truth
///    for "this login still owes a second factor"; it survives session
///    expiry and rotation.
/// 2. An invalid or expired login token is treated as carrying no 2FA
///    requirement (fail-open). Fail-closed would permanently lock out any
///    user whose token rotated mid-challenge. Reviewed tradeoff.
/// 3. When the last enabled provider disappears while a challenge is
///    pending, the pending flag and ledger entries are cleared so the user
///    is not stuck in a challenge-redirect loop.
///
/// Errors:
/// - A wrong challenge response is `Ok(false)`, never an error.
/// - An unknown provider id in `verify_challenge` is `Ok(false)` with no
///   side effects; it is caller error, not an attempt worth auditing.
/// - Audit publishing and remember-token issuance failures are logged and
///   swallowed; they never block authentication.
///
/// Concurrency:
/// - Calls are synchronous within one request. Two racing verifications
///   for the same user may both succeed and both emit events; 2FA success
///   is idempotent in effect, so this is tolerated rather than locked.
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

use crate::app_state::{
    ActivityPublisherType, AppState, EventDispatcherType, RememberIssuerType, TokenResolverType,
};
use crate::domain::{AuditEvent, Provider, ProviderId, TokenResolveError, User};
use crate::errors::TwoFactorError;
use crate::services::{PendingLoginTokenLedger, ProviderRegistry, SessionStateTracker};
use crate::utils::consts::{
    AUDIT_APP, AUDIT_SUBJECT_FAILED, AUDIT_SUBJECT_SUCCESS, AUDIT_TYPE_SECURITY,
    EVENT_CHALLENGE_FAILED, EVENT_CHALLENGE_PASSED,
};

#[derive(Clone)]
pub struct TwoFactorManager {
    registry: ProviderRegistry,
    tracker: SessionStateTracker,
    ledger: PendingLoginTokenLedger,
    token_resolver: TokenResolverType,
    remember_issuer: RememberIssuerType,
    activity_publisher: ActivityPublisherType,
    event_dispatcher: EventDispatcherType,
}

impl TwoFactorManager {
    pub fn new(state: AppState) -> Self {
        let registry = ProviderRegistry::new(
            state.config_store.clone(),
            state.app_supplier,
            state.provider_factory,
        );
        let tracker = SessionStateTracker::new(state.session_store);
        let ledger = PendingLoginTokenLedger::new(state.config_store);
        TwoFactorManager {
            registry,
            tracker,
            ledger,
            token_resolver: state.token_resolver,
            remember_issuer: state.remember_issuer,
            activity_publisher: state.activity_publisher,
            event_dispatcher: state.event_dispatcher,
        }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Whether the current session still owes a second factor for `user`.
    ///
    /// Idempotent and side-effect-light. Session flags are checked before
    /// the persistent ledger and provider lookups; the "no providers left"
    /// escape hatch is evaluated last so it always wins over a stale
    /// pending flag.
    pub async fn needs_second_factor(
        &self,
        user: Option<&User>,
    ) -> Result<bool, TwoFactorError> {
        let user = match user {
            Some(user) => user,
            None => return Ok(false),
        };

        // App-credential sessions never go through an interactive challenge.
        if self.tracker.authenticated_via_app_password().await? {
            return Ok(false);
        }

        if !self.tracker.is_pending_set().await? {
            if self.tracker.is_satisfied_for(&user.uid).await? {
                return Ok(false);
            }
            // The session may have been rebuilt from a login token that was
            // issued before 2FA was enabled, or after it was completed.
            let session_id = self.tracker.current_session_id().await;
            match self.token_resolver.token_for_session(&session_id).await {
                Ok(token) => {
                    if !self
                        .ledger
                        .requires_two_factor(&user.uid, token.id())
                        .await?
                    {
                        self.tracker.mark_satisfied(&user.uid).await?;
                        return Ok(false);
                    }
                }
                // Fail-open: an unresolvable token carries no requirement.
                Err(TokenResolveError::InvalidToken) => {}
                Err(err) => return Err(err.into()),
            }
        }

        if !self.registry.is_two_factor_authenticated(user).await? {
            // Self-healing: the last enabled provider went away while a
            // challenge was outstanding. Clear the stale markers so the
            // user is not locked out.
            tracing::info!(
                uid = user.uid.as_ref(),
                "no enabled two-factor provider left, clearing pending challenge state"
            );
            self.tracker.clear_pending().await?;
            self.ledger.clear_all(&user.uid).await?;
            return Ok(false);
        }

        Ok(true)
    }

    /// Marks the login attempt as awaiting its challenge. Call exactly once
    /// per login attempt, before showing the challenge UI.
    pub async fn prepare_two_factor_login(
        &self,
        user: &User,
        remember_device: bool,
    ) -> Result<(), TwoFactorError> {
        self.tracker.mark_pending(&user.uid, remember_device).await?;

        let session_id = self.tracker.current_session_id().await;
        match self.token_resolver.token_for_session(&session_id).await {
            Ok(token) => {
                self.ledger
                    .record(&user.uid, token.id(), Utc::now().timestamp())
                    .await?;
            }
            Err(TokenResolveError::InvalidToken) => {
                tracing::debug!(
                    uid = user.uid.as_ref(),
                    "no resolvable login token for session, skipping ledger entry"
                );
            }
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    /// Runs one challenge verification.
    ///
    /// On success the session is finalized (pending and remember flags
    /// cleared, satisfied flag set), the ledger entry for the current login
    /// token is removed, a remember-device token is issued if requested at
    /// login time, and success events are emitted. On failure nothing but
    /// the failure events happens, so the user may retry.
    pub async fn verify_challenge(
        &self,
        provider_id: &ProviderId,
        user: &User,
        challenge: &str,
    ) -> Result<bool, TwoFactorError> {
        let provider = match self.registry.get_provider(user, provider_id).await? {
            Some(provider) => provider,
            None => return Ok(false),
        };

        let passed = provider.verify_challenge(user, challenge).await?;
        if !passed {
            self.emit_challenge_result(user, &provider, false).await;
            return Ok(false);
        }

        if self.tracker.consume_remember().await? {
            if let Err(err) = self.remember_issuer.issue(user).await {
                tracing::warn!(
                    uid = user.uid.as_ref(),
                    error = %err,
                    "could not issue remember-device token"
                );
            }
        }
        self.tracker.clear_pending().await?;
        self.tracker.mark_satisfied(&user.uid).await?;

        let session_id = self.tracker.current_session_id().await;
        match self.token_resolver.token_for_session(&session_id).await {
            Ok(token) => self.ledger.clear(&user.uid, token.id()).await?,
            Err(TokenResolveError::InvalidToken) => {}
            Err(err) => return Err(err.into()),
        }

        self.emit_challenge_result(user, &provider, true).await;
        Ok(true)
    }

    async fn emit_challenge_result(&self, user: &User, provider: &Arc<dyn Provider>, passed: bool) {
        let subject = if passed {
            AUDIT_SUBJECT_SUCCESS
        } else {
            AUDIT_SUBJECT_FAILED
        };
        let event = AuditEvent {
            app: AUDIT_APP.to_string(),
            event_type: AUDIT_TYPE_SECURITY.to_string(),
            actor_uid: user.uid.clone(),
            affected_uid: user.uid.clone(),
            subject: subject.to_string(),
            params: json!({ "provider": provider.display_name() }),
        };
        if let Err(err) = self.activity_publisher.publish(event).await {
            tracing::warn!(
                uid = user.uid.as_ref(),
                error = %err,
                "activity publish failed, ignoring"
            );
        }

        let event_name = if passed {
            EVENT_CHALLENGE_PASSED
        } else {
            EVENT_CHALLENGE_FAILED
        };
        self.event_dispatcher
            .dispatch(
                event_name,
                json!({
                    "uid": user.uid.as_ref(),
                    "provider": provider.display_name(),
                }),
            )
            .await;
    }

    // Pass-throughs so the host only needs to hold the manager.

    pub async fn get_providers(
        &self,
        user: &User,
        include_backup: bool,
        enabled_only: bool,
    ) -> Result<
        std::collections::HashMap<ProviderId, Arc<dyn Provider>>,
        TwoFactorError,
    > {
        self.registry
            .get_providers(user, include_backup, enabled_only)
            .await
    }

    pub async fn get_provider(
        &self,
        user: &User,
        id: &ProviderId,
    ) -> Result<Option<Arc<dyn Provider>>, TwoFactorError> {
        self.registry.get_provider(user, id).await
    }

    pub async fn get_backup_provider(
        &self,
        user: &User,
    ) -> Result<Option<Arc<dyn Provider>>, TwoFactorError> {
        self.registry.get_backup_provider(user).await
    }

    pub async fn is_two_factor_authenticated(&self, user: &User) -> Result<bool, TwoFactorError> {
        self.registry.is_two_factor_authenticated(user).await
    }

    pub async fn enable_two_factor_authentication(
        &self,
        user: &User,
    ) -> Result<(), TwoFactorError> {
        self.registry.enable_two_factor_authentication(user).await
    }

    pub async fn disable_two_factor_authentication(
        &self,
        user: &User,
    ) -> Result<(), TwoFactorError> {
        self.registry.disable_two_factor_authentication(user).await
    }
}
