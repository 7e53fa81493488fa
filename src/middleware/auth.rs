use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};
use tracing::debug;

use crate::auth::login_destination;

/// Name of the encrypted cookie carrying the signed-in user.
pub const IDENTITY_COOKIE: &str = "hrportal.identity";

/// Extractor for pages that need a signed-in user.
///
/// Without a valid identity cookie the request is answered with a redirect
/// to the login page of the area the path belongs to. A cookie that does not
/// decrypt under the server key is treated as missing.
#[derive(Debug, Clone)]
pub struct RequireSignIn {
    pub subject: String,
}

impl<S> FromRequestParts<S> for RequireSignIn
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = PrivateCookieJar::from_headers(&parts.headers, Key::from_ref(state));

        if let Some(cookie) = jar.get(IDENTITY_COOKIE)
            && !cookie.value().is_empty()
        {
            return Ok(Self {
                subject: cookie.value().to_owned(),
            });
        }

        let path = parts.uri.path();
        let destination = login_destination(path);
        debug!(path, destination, "redirecting unauthenticated request to login");
        Err(Redirect::to(destination).into_response())
    }
}

/// Build the identity cookie for `subject`. Add it to a [`PrivateCookieJar`]
/// so the value is encrypted.
pub fn identity_cookie(subject: impl Into<String>, insecure: bool) -> Cookie<'static> {
    Cookie::build(Cookie::new(IDENTITY_COOKIE, subject.into()))
        .path("/")
        .http_only(true)
        .secure(!insecure)
        .same_site(SameSite::Lax)
        .build()
}
