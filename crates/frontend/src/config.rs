use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub transactions_path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SessionConfig {
    /// sessionStorage key holding the JSON-encoded logged-in user
    pub storage_key: String,
    pub login_path: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://laundryy-backend.vercel.app"
transactions_path = "/transaksi"

[session]
storage_key = "user"
login_path = "/login"
"#;

/// Build-time override for the backend origin, e.g.
/// `LAUNDRY_API_BASE_URL=http://127.0.0.1:3000 trunk build`
const API_BASE_OVERRIDE: Option<&str> = option_env!("LAUNDRY_API_BASE_URL");

static CONFIG: Lazy<AppConfig> = Lazy::new(load_config);

/// Global configuration, parsed once on first access.
pub fn config() -> &'static AppConfig {
    &CONFIG
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://laundryy-backend.vercel.app".to_string(),
                transactions_path: "/transaksi".to_string(),
            },
            session: SessionConfig {
                storage_key: "user".to_string(),
                login_path: "/login".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Full URL of the transaction listing endpoint
    pub fn transactions_url(&self) -> String {
        format!(
            "{}{}",
            self.api.base_url.trim_end_matches('/'),
            self.api.transactions_path
        )
    }
}

fn load_config() -> AppConfig {
    let mut config = parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::warn!("Embedded config is invalid, using defaults: {}", e);
        AppConfig::default()
    });

    if let Some(base_url) = API_BASE_OVERRIDE.filter(|s| !s.trim().is_empty()) {
        log::info!("API base overridden at build time: {}", base_url);
        config.api.base_url = base_url.to_string();
    }

    config
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.session.storage_key, "user");
    }

    #[test]
    fn test_transactions_url() {
        let config = AppConfig::default();
        assert_eq!(
            config.transactions_url(),
            "https://laundryy-backend.vercel.app/transaksi"
        );

        let mut config = AppConfig::default();
        config.api.base_url = "http://127.0.0.1:3000/".to_string();
        assert_eq!(config.transactions_url(), "http://127.0.0.1:3000/transaksi");
    }

    #[test]
    fn test_incomplete_config_is_rejected() {
        assert!(parse_config("[api]\nbase_url = \"x\"").is_err());
    }
}
