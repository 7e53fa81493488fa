//! Picks the sign-in page for an unauthenticated request.
//!
//! Each staff area has its own login page; anything outside the areas goes
//! to the shared identity login.

use std::fmt;

/// Login page for requests outside every area.
pub const DEFAULT_LOGIN_PATH: &str = "/Identity/Account/Login";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Area {
    Admin,
    HumanResource,
    Accounting,
}

impl Area {
    /// Evaluation order for prefix matching. First match wins.
    pub const ALL: [Area; 3] = [Area::Admin, Area::HumanResource, Area::Accounting];

    pub const fn prefix(self) -> &'static str {
        match self {
            Area::Admin => "/Admin",
            Area::HumanResource => "/HumanResource",
            Area::Accounting => "/Accounting",
        }
    }

    pub const fn login_path(self) -> &'static str {
        match self {
            Area::Admin => "/Admin/Account/Login",
            Area::HumanResource => "/HumanResource/Account/Login",
            Area::Accounting => "/Accounting/Account/Login",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Area::Admin => "Admin",
            Area::HumanResource => "HumanResource",
            Area::Accounting => "Accounting",
        }
    }

    /// The first area whose prefix starts `path`, if any.
    pub fn from_path(path: &str) -> Option<Area> {
        Area::ALL
            .into_iter()
            .find(|area| starts_with_segment(path, area.prefix()))
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where to send an unauthenticated request for `path`.
pub fn login_destination(path: &str) -> &'static str {
    Area::from_path(path)
        .map(Area::login_path)
        .unwrap_or(DEFAULT_LOGIN_PATH)
}

/// Case-sensitive prefix match that only stops on a segment boundary.
fn starts_with_segment(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
