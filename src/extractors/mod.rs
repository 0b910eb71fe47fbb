pub mod operator_auth;
pub mod ping_reason;
