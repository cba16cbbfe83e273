use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_cookies::Cookies;

use crate::{config::Config, services::session, state::AppState};

/// Path prefixes the guard never intercepts.
const EXCLUDED_PREFIXES: &[&str] = &["/api/", "/static/", "/assets/"];
/// File extensions the guard never intercepts.
const EXCLUDED_EXTENSIONS: &[&str] = &[".svg", ".png", ".jpg", ".jpeg", ".gif", ".webp", ".ico"];

/// The guard's verdict for a single navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the request through unchanged.
    Allow,
    /// Answer with a temporary redirect to the given target.
    Redirect(String),
}

/// Returns whether a path is excluded from interception.
///
/// The API namespace, static assets and common image files are always let
/// through; the guard only gates page navigations.
fn is_excluded(path: &str) -> bool {
    if path == "/api" || path == "/favicon.ico" {
        return true;
    }

    EXCLUDED_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
        || EXCLUDED_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Evaluates a navigation against the configured route sets.
///
/// Pure and synchronous: the decision depends only on the request path, the
/// raw cookie value and the configuration. No I/O, no ambient state.
///
/// # Arguments
///
/// * `path` - The path of the incoming request.
/// * `token` - The raw session cookie value, if any.
/// * `config` - The application's configuration.
///
/// # Returns
///
/// The `GuardDecision` for this navigation.
pub fn evaluate(path: &str, token: Option<&str>, config: &Config) -> GuardDecision {
    if is_excluded(path) {
        return GuardDecision::Allow;
    }

    let session = token.and_then(session::decode_token);

    let is_protected = config
        .protected_prefixes
        .iter()
        .any(|prefix| path.starts_with(prefix.as_str()));
    let is_auth_page = config
        .auth_prefixes
        .iter()
        .any(|prefix| path.starts_with(prefix.as_str()));

    if is_protected && session.is_none() {
        let query: String = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("redirect", path)
            .finish();
        return GuardDecision::Redirect(format!("{}?{}", config.login_path, query));
    }

    if is_auth_page && session.is_some() {
        return GuardDecision::Redirect(config.landing_path.clone());
    }

    GuardDecision::Allow
}

/// Extracts the raw session token from the request cookies.
///
/// # Arguments
///
/// * `cookies` - The request cookies.
/// * `name` - The session cookie name.
///
/// # Returns
///
/// An `Option` containing the raw token if found.
pub fn extract_session_token(cookies: &Cookies, name: &str) -> Option<String> {
    cookies.get(name).map(|cookie| cookie.value().to_string())
}

/// A middleware that gates page navigations on session presence.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `cookies` - The request cookies.
/// * `request` - The incoming request.
/// * `next` - The next middleware in the chain.
///
/// # Returns
///
/// The downstream `Response`, or a redirect.
pub async fn route_guard(
    State(state): State<AppState>,
    cookies: Cookies,
    request: Request<Body>,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let token = extract_session_token(&cookies, &state.config.cookie_name);

    match evaluate(&path, token.as_deref(), &state.config) {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::Redirect(target) => {
            tracing::debug!("🔀 Redirecting {} to {}", path, target);
            Redirect::temporary(&target).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::User;

    fn test_config() -> Config {
        Config {
            protected_prefixes: vec![
                "/monitoramento".to_string(),
                "/cadastro".to_string(),
                "/relatorios".to_string(),
                "/configuracoes".to_string(),
            ],
            auth_prefixes: vec!["/auth/login".to_string()],
            cookie_name: "ioturn_session".to_string(),
            session_duration_days: 7,
            login_path: "/auth/login".to_string(),
            landing_path: "/monitoramento".to_string(),
            monitoring_api_url: "http://127.0.0.1:9001/api/maquinas".to_string(),
            registry_api_url: "http://127.0.0.1:9002".to_string(),
            is_production: false,
        }
    }

    fn valid_token() -> String {
        session::create_token(
            User {
                id: "a1b2c3d4e5f60708".to_string(),
                email: "user@example.com".to_string(),
                name: "Demo User".to_string(),
                role: "operator".to_string(),
            },
            7,
        )
        .unwrap()
    }

    #[test]
    fn protected_route_without_session_redirects_to_login() {
        let decision = evaluate("/monitoramento", None, &test_config());
        assert_eq!(
            decision,
            GuardDecision::Redirect("/auth/login?redirect=%2Fmonitoramento".to_string())
        );
    }

    #[test]
    fn nested_protected_route_preserves_the_full_path() {
        let decision = evaluate("/monitoramento/42", None, &test_config());
        assert_eq!(
            decision,
            GuardDecision::Redirect("/auth/login?redirect=%2Fmonitoramento%2F42".to_string())
        );
    }

    #[test]
    fn protected_route_with_session_is_allowed() {
        let token = valid_token();
        let decision = evaluate("/monitoramento", Some(&token), &test_config());
        assert_eq!(decision, GuardDecision::Allow);
    }

    #[test]
    fn protected_route_with_garbage_cookie_redirects_to_login() {
        let decision = evaluate("/cadastro/usuarios", Some("not-a-token"), &test_config());
        assert_eq!(
            decision,
            GuardDecision::Redirect("/auth/login?redirect=%2Fcadastro%2Fusuarios".to_string())
        );
    }

    #[test]
    fn auth_page_with_session_redirects_to_landing() {
        let token = valid_token();
        let decision = evaluate("/auth/login", Some(&token), &test_config());
        assert_eq!(decision, GuardDecision::Redirect("/monitoramento".to_string()));
    }

    #[test]
    fn auth_page_without_session_is_allowed() {
        let decision = evaluate("/auth/login", None, &test_config());
        assert_eq!(decision, GuardDecision::Allow);
    }

    #[test]
    fn home_without_session_is_allowed() {
        let decision = evaluate("/", None, &test_config());
        assert_eq!(decision, GuardDecision::Allow);
    }

    #[test]
    fn api_and_assets_are_never_intercepted() {
        let config = test_config();
        assert_eq!(evaluate("/api/auth/me", None, &config), GuardDecision::Allow);
        assert_eq!(evaluate("/favicon.ico", None, &config), GuardDecision::Allow);
        assert_eq!(evaluate("/logo.png", None, &config), GuardDecision::Allow);
        assert_eq!(evaluate("/static/app.js", None, &config), GuardDecision::Allow);
    }
}
