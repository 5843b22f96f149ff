use std::collections::HashMap;

use crate::domain::{LoginToken, LoginTokenResolver, TokenResolveError};

/// In-memory session-id to login-token mapping. Unknown session ids
/// resolve to `InvalidToken`, which callers treat as fail-open.
#[derive(Default)]
pub struct HashmapTokenResolver {
    tokens: HashMap<String, LoginToken>,
}

impl HashmapTokenResolver {
    pub fn with_token(mut self, session_id: impl Into<String>, token: LoginToken) -> Self {
        self.tokens.insert(session_id.into(), token);
        self
    }
}

#[async_trait::async_trait]
impl LoginTokenResolver for HashmapTokenResolver {
    async fn token_for_session(&self, session_id: &str) -> Result<LoginToken, TokenResolveError> {
        match self.tokens.get(session_id) {
            Some(token) => Ok(token.clone()),
            None => Err(TokenResolveError::InvalidToken),
        }
    }
}
