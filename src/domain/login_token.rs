/// Opaque identifier of a persisted login session, minted by the external
/// token issuer. Outlives the in-memory session it was issued for.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginToken {
    id: String,
}

impl LoginToken {
    pub fn new(id: impl Into<String>) -> Self {
        LoginToken { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}
