pub mod auth;

pub use auth::{IDENTITY_COOKIE, RequireSignIn, identity_cookie};
