use thiserror::Error;

use crate::domain::UserId;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigStoreError {
    #[error("config store failure")]
    UnexpectedError,
}

// This trait represents the interface all concrete per-user config stores
// should implement. Values are plain strings, keyed by (uid, namespace, key).
#[async_trait::async_trait]
pub trait UserConfigStore: Send + Sync {
    async fn get_user_value(
        &self,
        uid: &UserId,
        namespace: &str,
        key: &str,
        default: &str,
    ) -> Result<String, ConfigStoreError>;
    async fn set_user_value(
        &mut self,
        uid: &UserId,
        namespace: &str,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigStoreError>;
    async fn delete_user_value(
        &mut self,
        uid: &UserId,
        namespace: &str,
        key: &str,
    ) -> Result<(), ConfigStoreError>;
    async fn list_user_keys(
        &self,
        uid: &UserId,
        namespace: &str,
    ) -> Result<Vec<String>, ConfigStoreError>;
}
