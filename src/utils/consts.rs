// Session flag keys. Lifetime of the values is the login session.
pub const SESSION_UID_KEY: &str = "two_factor_auth_uid";
pub const SESSION_UID_DONE_KEY: &str = "two_factor_auth_passed";
pub const REMEMBER_LOGIN_KEY: &str = "two_factor_remember_login";
pub const APP_PASSWORD_KEY: &str = "app_password";

// Config-store namespaces and keys.
pub const CORE_NAMESPACE: &str = "core";
pub const LOGIN_TOKEN_NAMESPACE: &str = "login_token_2fa";
pub const TWO_FACTOR_DISABLED_KEY: &str = "two_factor_auth_disabled";

pub const BACKUP_CODES_PROVIDER_ID: &str = "backup_codes";

// Audit/activity event shape.
pub const AUDIT_APP: &str = "core";
pub const AUDIT_TYPE_SECURITY: &str = "security";
pub const AUDIT_SUBJECT_SUCCESS: &str = "twofactor_success";
pub const AUDIT_SUBJECT_FAILED: &str = "twofactor_failed";

// Domain event names.
pub const EVENT_CHALLENGE_PASSED: &str = "twofactor.challenge_passed";
pub const EVENT_CHALLENGE_FAILED: &str = "twofactor.challenge_failed";
