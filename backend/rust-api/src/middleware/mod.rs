pub mod auth;

pub use auth::{auth_middleware, decode_token, issue_token, AuthUser, Claims};
