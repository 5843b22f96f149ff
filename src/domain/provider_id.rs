use crate::utils::consts::BACKUP_CODES_PROVIDER_ID;

#[derive(PartialEq, Debug, Clone, Eq, Hash)]
pub struct ProviderId(String);

impl ProviderId {
    pub fn new(id: impl Into<String>) -> Self {
        ProviderId(id.into())
    }

    /// Id of the distinguished backup-codes provider.
    pub fn backup_codes() -> Self {
        ProviderId(BACKUP_CODES_PROVIDER_ID.to_string())
    }
}

impl AsRef<str> for ProviderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
