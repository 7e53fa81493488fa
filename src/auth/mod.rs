pub mod redirect;

pub use redirect::{Area, DEFAULT_LOGIN_PATH, login_destination};
