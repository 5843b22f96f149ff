use std::collections::HashMap;

use crate::domain::{ConfigStoreError, UserConfigStore, UserId};

/// In-memory per-user config store, keyed by (uid, namespace).
#[derive(Default)]
pub struct HashmapConfigStore {
    values: HashMap<(String, String), HashMap<String, String>>,
}

impl HashmapConfigStore {
    fn scope(uid: &UserId, namespace: &str) -> (String, String) {
        (uid.as_ref().to_string(), namespace.to_string())
    }
}

#[async_trait::async_trait]
impl UserConfigStore for HashmapConfigStore {
    async fn get_user_value(
        &self,
        uid: &UserId,
        namespace: &str,
        key: &str,
        default: &str,
    ) -> Result<String, ConfigStoreError> {
        let value = self
            .values
            .get(&Self::scope(uid, namespace))
            .and_then(|scope| scope.get(key))
            .cloned();
        Ok(value.unwrap_or_else(|| default.to_string()))
    }

    async fn set_user_value(
        &mut self,
        uid: &UserId,
        namespace: &str,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigStoreError> {
        //if there's an old value for this key it'll be returned, but we don't care about that
        let _ = self
            .values
            .entry(Self::scope(uid, namespace))
            .or_default()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete_user_value(
        &mut self,
        uid: &UserId,
        namespace: &str,
        key: &str,
    ) -> Result<(), ConfigStoreError> {
        if let Some(scope) = self.values.get_mut(&Self::scope(uid, namespace)) {
            let _ = scope.remove(key);
        }
        Ok(())
    }

    async fn list_user_keys(
        &self,
        uid: &UserId,
        namespace: &str,
    ) -> Result<Vec<String>, ConfigStoreError> {
        let keys = self
            .values
            .get(&Self::scope(uid, namespace))
            .map(|scope| scope.keys().cloned().collect())
            .unwrap_or_default();
        Ok(keys)
    }
}
