use std::sync::Arc;

use axum::{
    Router,
    extract::FromRef,
    http::{HeaderValue, header},
    routing::{any, get, post},
};
use axum_extra::extract::cookie::Key;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer};

use crate::auth::{Area, DEFAULT_LOGIN_PATH};
use crate::handlers::pages;
use crate::middleware::auth::RequireSignIn;
use crate::service::ServiceRegistry;

/// 30 days, no subdomains.
const HSTS_VALUE: &str = "max-age=2592000";

#[derive(Clone)]
pub struct PortalState {
    pub registry: Arc<ServiceRegistry>,
    cookie_key: Key,
}

impl PortalState {
    pub fn new(registry: Arc<ServiceRegistry>, cookie_key: Key) -> Self {
        Self {
            registry,
            cookie_key,
        }
    }
}

impl FromRef<PortalState> for Key {
    fn from_ref(state: &PortalState) -> Key {
        state.cookie_key.clone()
    }
}

pub fn portal_router(state: PortalState) -> Router {
    let config = &state.registry.config;
    let production = config.is_production();
    let static_dir = config.basic.static_dir.clone();

    let mut router: Router<PortalState> = Router::new()
        .route("/", get(pages::home))
        .route("/Home/Error", get(pages::error_page))
        .route(DEFAULT_LOGIN_PATH, get(pages::identity_login));

    for area in Area::ALL {
        let protected = any(move |user: RequireSignIn| pages::area_page(area, user));
        router = router
            .route(area.login_path(), get(move || pages::area_login(area)))
            .route(area.prefix(), protected.clone())
            .route(&format!("{}/", area.prefix()), protected.clone())
            .route(&format!("{}/{{*rest}}", area.prefix()), protected);
    }

    if !production {
        router = router.route("/ApplyDatabaseMigrations", post(pages::apply_migrations));
    }

    router = router.fallback_service(ServeDir::new(static_dir));

    // last, so static files get the header too
    if production {
        router = router.layer(SetResponseHeaderLayer::if_not_present(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static(HSTS_VALUE),
        ));
    }

    router.with_state(state)
}
