use serde::Serialize;

#[derive(PartialEq, Debug, Clone, Eq, Hash, Serialize)]
pub struct UserId(String);

impl UserId {
    pub fn parse(uid: String) -> Result<UserId, String> {
        if uid.is_empty() || uid.chars().any(|c| c.is_control() || c.is_whitespace()) {
            return Err(format!("User id {:?} is not valid", uid));
        }
        Ok(UserId(uid))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
