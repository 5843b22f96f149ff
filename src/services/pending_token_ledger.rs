use crate::app_state::ConfigStoreType;
use crate::domain::{ConfigStoreError, UserId};
use crate::utils::consts::LOGIN_TOKEN_NAMESPACE;

/// Persistent per-user record of which login tokens still owe a second
/// factor. An entry exists iff that token id has not completed 2FA; the
/// value is the unix timestamp the entry was created at. This survives
/// session expiry, so a user cannot skip 2FA by waiting out the session
/// while holding a still-valid login token.
#[derive(Clone)]
pub struct PendingLoginTokenLedger {
    config_store: ConfigStoreType,
}

impl PendingLoginTokenLedger {
    pub fn new(config_store: ConfigStoreType) -> Self {
        PendingLoginTokenLedger { config_store }
    }

    pub async fn record(
        &self,
        uid: &UserId,
        token_id: &str,
        timestamp: i64,
    ) -> Result<(), ConfigStoreError> {
        self.config_store
            .write()
            .await
            .set_user_value(uid, LOGIN_TOKEN_NAMESPACE, token_id, &timestamp.to_string())
            .await
    }

    pub async fn requires_two_factor(
        &self,
        uid: &UserId,
        token_id: &str,
    ) -> Result<bool, ConfigStoreError> {
        let keys = self
            .config_store
            .read()
            .await
            .list_user_keys(uid, LOGIN_TOKEN_NAMESPACE)
            .await?;
        Ok(keys.iter().any(|k| k == token_id))
    }

    pub async fn clear(&self, uid: &UserId, token_id: &str) -> Result<(), ConfigStoreError> {
        self.config_store
            .write()
            .await
            .delete_user_value(uid, LOGIN_TOKEN_NAMESPACE, token_id)
            .await
    }

    /// Drops every entry for the user. Used when 2FA stops applying
    /// altogether, so stale markers cannot block a later login once
    /// providers come back.
    pub async fn clear_all(&self, uid: &UserId) -> Result<(), ConfigStoreError> {
        let keys = self
            .config_store
            .read()
            .await
            .list_user_keys(uid, LOGIN_TOKEN_NAMESPACE)
            .await?;
        let mut store = self.config_store.write().await;
        for key in keys {
            store
                .delete_user_value(uid, LOGIN_TOKEN_NAMESPACE, &key)
                .await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use super::*;
    use crate::services::data_stores::HashmapConfigStore;

    fn ledger() -> PendingLoginTokenLedger {
        PendingLoginTokenLedger::new(Arc::new(RwLock::new(HashmapConfigStore::default())))
    }

    fn uid(s: &str) -> UserId {
        UserId::parse(s.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_record_then_clear() {
        let ledger = ledger();
        let alice = uid("alice");
        assert_eq!(Ok(false), ledger.requires_two_factor(&alice, "token-1").await);
        ledger.record(&alice, "token-1", 1_700_000_000).await.unwrap();
        assert_eq!(Ok(true), ledger.requires_two_factor(&alice, "token-1").await);
        ledger.clear(&alice, "token-1").await.unwrap();
        assert_eq!(Ok(false), ledger.requires_two_factor(&alice, "token-1").await);
        // clearing again is a no-op
        assert_eq!(Ok(()), ledger.clear(&alice, "token-1").await);
    }

    #[tokio::test]
    async fn test_record_is_upsert() {
        let ledger = ledger();
        let alice = uid("alice");
        ledger.record(&alice, "token-1", 1).await.unwrap();
        ledger.record(&alice, "token-1", 2).await.unwrap();
        assert_eq!(Ok(true), ledger.requires_two_factor(&alice, "token-1").await);
    }

    #[tokio::test]
    async fn test_clear_all_scoped_to_user() {
        let ledger = ledger();
        let alice = uid("alice");
        let bob = uid("bob");
        ledger.record(&alice, "token-1", 1).await.unwrap();
        ledger.record(&alice, "token-2", 2).await.unwrap();
        ledger.record(&bob, "token-3", 3).await.unwrap();
        ledger.clear_all(&alice).await.unwrap();
        assert_eq!(Ok(false), ledger.requires_two_factor(&alice, "token-1").await);
        assert_eq!(Ok(false), ledger.requires_two_factor(&alice, "token-2").await);
        assert_eq!(Ok(true), ledger.requires_two_factor(&bob, "token-3").await);
    }
}
