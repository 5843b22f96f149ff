use super::user_id::UserId;

#[derive(PartialEq, Debug, Clone)]
pub struct User {
    pub uid: UserId,
    pub display_name: String,
}

impl User {
    pub fn new(uid: UserId, display_name: String) -> Self {
        User { uid, display_name }
    }
}
