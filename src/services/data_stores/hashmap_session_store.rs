use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::{SessionStore, SessionStoreError};

/// In-memory login session with a fixed session id.
pub struct HashmapSessionStore {
    session_id: String,
    values: HashMap<String, String>,
}

impl HashmapSessionStore {
    pub fn new(session_id: String) -> Self {
        HashmapSessionStore {
            session_id,
            values: HashMap::new(),
        }
    }
}

impl Default for HashmapSessionStore {
    fn default() -> Self {
        HashmapSessionStore::new(Uuid::new_v4().to_string())
    }
}

#[async_trait::async_trait]
impl SessionStore for HashmapSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        Ok(self.values.get(key).cloned())
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        let _ = self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&mut self, key: &str) -> Result<(), SessionStoreError> {
        let _ = self.values.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, SessionStoreError> {
        Ok(self.values.contains_key(key))
    }

    fn session_id(&self) -> String {
        self.session_id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let mut store = HashmapSessionStore::new("sess-1".to_string());
        assert_eq!(Ok(None), store.get("k").await);
        store.set("k", "v").await.unwrap();
        assert_eq!(Ok(Some("v".to_string())), store.get("k").await);
        assert_eq!(Ok(true), store.exists("k").await);
        store.remove("k").await.unwrap();
        assert_eq!(Ok(false), store.exists("k").await);
        assert_eq!("sess-1", store.session_id());
    }
}
