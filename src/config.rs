use std::env;
use anyhow::{Context, Result};

/// The application's configuration.
#[derive(Clone)]
pub struct Config {
    /// Route prefixes that require an authenticated session.
    pub protected_prefixes: Vec<String>,
    /// Route prefixes meant only for unauthenticated users.
    pub auth_prefixes: Vec<String>,
    /// The name of the session cookie.
    pub cookie_name: String,
    /// The duration of a session in days.
    pub session_duration_days: i64,
    /// The path of the login page.
    pub login_path: String,
    /// The landing route for authenticated users.
    pub landing_path: String,
    /// The base URL of the external monitoring API.
    pub monitoring_api_url: String,
    /// The base URL of the external registry API.
    pub registry_api_url: String,
    /// Whether the application runs in production mode.
    pub is_production: bool,
}

/// Parses a comma-separated route-prefix list.
fn parse_prefixes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

impl Config {
    /// Creates a new `Config` from environment variables.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Config`.
    pub fn from_env() -> Result<Self> {
        let protected_prefixes = parse_prefixes(
            &env::var("PROTECTED_ROUTES").unwrap_or_else(|_| {
                "/monitoramento,/cadastro,/relatorios,/configuracoes".to_string()
            }),
        );
        let auth_prefixes = parse_prefixes(
            &env::var("AUTH_ROUTES").unwrap_or_else(|_| "/auth/login".to_string()),
        );

        if protected_prefixes.is_empty() {
            anyhow::bail!("PROTECTED_ROUTES must name at least one route prefix");
        }

        Ok(Self {
            protected_prefixes,
            auth_prefixes,
            cookie_name: env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| "ioturn_session".to_string()),
            session_duration_days: env::var("SESSION_DURATION_DAYS")
                .unwrap_or_else(|_| "7".to_string())
                .parse()
                .context("Invalid SESSION_DURATION_DAYS")?,
            login_path: env::var("LOGIN_PATH").unwrap_or_else(|_| "/auth/login".to_string()),
            landing_path: env::var("LANDING_PATH")
                .unwrap_or_else(|_| "/monitoramento".to_string()),
            monitoring_api_url: env::var("MONITORING_API_URL")
                .context("MONITORING_API_URL must be set")?,
            registry_api_url: env::var("REGISTRY_API_URL")
                .context("REGISTRY_API_URL must be set")?,
            is_production: env::var("APP_ENV")
                .unwrap_or_else(|_| "development".to_string())
                == "production",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_prefixes() {
        let prefixes = parse_prefixes("/monitoramento, /cadastro ,,/relatorios");
        assert_eq!(prefixes, vec!["/monitoramento", "/cadastro", "/relatorios"]);
    }
}
