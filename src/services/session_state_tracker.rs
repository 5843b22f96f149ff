use crate::app_state::SessionStoreType;
use crate::domain::{SessionStoreError, UserId};
use crate::utils::consts::{
    APP_PASSWORD_KEY, REMEMBER_LOGIN_KEY, SESSION_UID_DONE_KEY, SESSION_UID_KEY,
};

/// Read/write wrapper over the session flags that encode "2FA pending",
/// "2FA satisfied" and "remember this device" for the current login
/// attempt. No cross-session visibility; everything here dies with the
/// session.
#[derive(Clone)]
pub struct SessionStateTracker {
    session_store: SessionStoreType,
}

impl SessionStateTracker {
    pub fn new(session_store: SessionStoreType) -> Self {
        SessionStateTracker { session_store }
    }

    pub async fn mark_pending(
        &self,
        uid: &UserId,
        remember: bool,
    ) -> Result<(), SessionStoreError> {
        let mut store = self.session_store.write().await;
        store.set(SESSION_UID_KEY, uid.as_ref()).await?;
        store
            .set(REMEMBER_LOGIN_KEY, if remember { "1" } else { "0" })
            .await
    }

    /// Removes both the pending uid and the remember flag.
    pub async fn clear_pending(&self) -> Result<(), SessionStoreError> {
        let mut store = self.session_store.write().await;
        store.remove(SESSION_UID_KEY).await?;
        store.remove(REMEMBER_LOGIN_KEY).await
    }

    pub async fn mark_satisfied(&self, uid: &UserId) -> Result<(), SessionStoreError> {
        self.session_store
            .write()
            .await
            .set(SESSION_UID_DONE_KEY, uid.as_ref())
            .await
    }

    pub async fn is_satisfied_for(&self, uid: &UserId) -> Result<bool, SessionStoreError> {
        let value = self.session_store.read().await.get(SESSION_UID_DONE_KEY).await?;
        Ok(value.as_deref() == Some(uid.as_ref()))
    }

    pub async fn is_pending_set(&self) -> Result<bool, SessionStoreError> {
        self.session_store.read().await.exists(SESSION_UID_KEY).await
    }

    pub async fn pending_uid(&self) -> Result<Option<UserId>, SessionStoreError> {
        let value = self.session_store.read().await.get(SESSION_UID_KEY).await?;
        Ok(value.and_then(|v| UserId::parse(v).ok()))
    }

    /// Reads the remember flag; the caller's subsequent `clear_pending`
    /// counts as consuming it.
    pub async fn consume_remember(&self) -> Result<bool, SessionStoreError> {
        let value = self.session_store.read().await.get(REMEMBER_LOGIN_KEY).await?;
        Ok(value.as_deref() == Some("1"))
    }

    /// True when the session was authenticated with a long-lived app
    /// credential instead of an interactive login.
    pub async fn authenticated_via_app_password(&self) -> Result<bool, SessionStoreError> {
        self.session_store.read().await.exists(APP_PASSWORD_KEY).await
    }

    pub async fn current_session_id(&self) -> String {
        self.session_store.read().await.session_id()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use super::*;
    use crate::services::data_stores::HashmapSessionStore;

    fn tracker() -> SessionStateTracker {
        SessionStateTracker::new(Arc::new(RwLock::new(HashmapSessionStore::new(
            "sess-1".to_string(),
        ))))
    }

    fn uid(s: &str) -> UserId {
        UserId::parse(s.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_pending_roundtrip() {
        let tracker = tracker();
        assert_eq!(Ok(false), tracker.is_pending_set().await);
        tracker.mark_pending(&uid("alice"), true).await.unwrap();
        assert_eq!(Ok(true), tracker.is_pending_set().await);
        assert_eq!(Ok(Some(uid("alice"))), tracker.pending_uid().await);
        assert_eq!(Ok(true), tracker.consume_remember().await);
        tracker.clear_pending().await.unwrap();
        assert_eq!(Ok(false), tracker.is_pending_set().await);
        assert_eq!(Ok(false), tracker.consume_remember().await);
    }

    #[tokio::test]
    async fn test_satisfied_is_per_uid() {
        let tracker = tracker();
        tracker.mark_satisfied(&uid("alice")).await.unwrap();
        assert_eq!(Ok(true), tracker.is_satisfied_for(&uid("alice")).await);
        assert_eq!(Ok(false), tracker.is_satisfied_for(&uid("bob")).await);
    }
}
