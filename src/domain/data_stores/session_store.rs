use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SessionStoreError {
    #[error("session store failure")]
    UnexpectedError,
}

/// The live login session: string-valued flags plus the session identifier
/// the login-token resolver keys on.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError>;
    async fn set(&mut self, key: &str, value: &str) -> Result<(), SessionStoreError>;
    async fn remove(&mut self, key: &str) -> Result<(), SessionStoreError>;
    async fn exists(&self, key: &str) -> Result<bool, SessionStoreError>;
    fn session_id(&self) -> String;
}
