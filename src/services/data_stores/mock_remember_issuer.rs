use tokio::sync::Mutex;

use crate::domain::{RememberIssueError, RememberTokenIssuer, User, UserId};

/// Remember-device issuer that records who it issued for instead of
/// talking to a session subsystem.
#[derive(Default)]
pub struct MockRememberIssuer {
    issued: Mutex<Vec<UserId>>,
}

impl MockRememberIssuer {
    pub async fn issued(&self) -> Vec<UserId> {
        self.issued.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl RememberTokenIssuer for MockRememberIssuer {
    async fn issue(&self, user: &User) -> Result<(), RememberIssueError> {
        self.issued.lock().await.push(user.uid.clone());
        Ok(())
    }
}
