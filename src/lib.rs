use std::time::Duration;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use http::{Method, header};
use tower_cookies::CookieManagerLayer;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod config;
pub mod error;
pub mod state;

pub mod crypto {
    pub mod token;
}

pub mod models {
    pub mod machine;
    pub mod session;
    pub mod user;
}

pub mod services {
    pub mod auth;
    pub mod monitoring;
    pub mod registry;
    pub mod session;
}

pub mod handlers {
    pub mod auth;
    pub mod monitoring;
    pub mod registry;
}

pub mod middleware_layer {
    pub mod auth;
    pub mod guard;
}

pub mod validation {
    pub mod auth;
}

use state::AppState;

/// Assembles the application router.
///
/// Kept out of `main` so the integration suite can drive the full stack
/// in-process.
///
/// # Arguments
///
/// * `state` - The application state.
///
/// # Returns
///
/// The fully layered `Router`.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            "http://localhost:3000".parse().unwrap(),
            "http://127.0.0.1:3000".parse().unwrap(),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::COOKIE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(86400));

    let auth_routes = Router::new()
        .route(
            "/api/auth/external-login",
            post(handlers::auth::external_login),
        )
        .route("/api/auth/callback", post(handlers::auth::callback))
        .route("/api/auth/logout", post(handlers::auth::logout))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/api/auth/me", get(handlers::auth::me))
        .route(
            "/api/monitoramento/{machine_id}",
            get(handlers::monitoring::get_machine),
        )
        .route(
            "/api/cadastro/usuarios",
            post(handlers::registry::create_user),
        )
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware_layer::auth::require_auth,
        ))
        .with_state(state.clone());

    Router::new()
        .merge(auth_routes)
        .merge(protected_routes)
        .fallback_service(ServeDir::new("public"))
        .layer(from_fn_with_state(
            state,
            middleware_layer::guard::route_guard,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default())
                .on_request(DefaultOnRequest::default().level(Level::DEBUG))
                .on_response(DefaultOnResponse::default().level(Level::DEBUG))
                .on_failure(DefaultOnFailure::default().level(Level::ERROR)),
        )
        .layer(CookieManagerLayer::new())
        .layer(cors)
}
