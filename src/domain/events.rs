use serde::Serialize;
use serde_json::Value;

use super::user_id::UserId;

/// Entry handed to the activity/audit sink after a challenge attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEvent {
    pub app: String,
    pub event_type: String,
    pub actor_uid: UserId,
    pub affected_uid: UserId,
    pub subject: String,
    pub params: Value,
}
