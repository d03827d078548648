use std::path::PathBuf;

/// Database used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://tmnt.db?mode=rwc";

/// A configuration variable that is set but cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be {expected}, got '{value}'")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Whether `DELETE /api/v1/records` may wipe the store (default: `false`).
    pub enable_reset: bool,
    /// Directory served for requests no API route matches.
    pub static_dir: Option<PathBuf>,
    /// Record store location.
    pub database_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                     |
    /// |------------------------|-----------------------------|
    /// | `HOST`                 | `0.0.0.0`                   |
    /// | `PORT`                 | `3000`                      |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                        |
    /// | `ENABLE_RESET`         | `false`                     |
    /// | `STATIC_DIR`           | unset                       |
    /// | `DATABASE_URL`         | `sqlite://tmnt.db?mode=rwc` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError {
                var: "PORT",
                expected: "a valid u16",
                value,
            })?,
            None => 3000,
        };

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(value) => value.parse().map_err(|_| ConfigError {
                var: "REQUEST_TIMEOUT_SECS",
                expected: "a valid u64",
                value,
            })?,
            None => 30,
        };

        let enable_reset = match lookup("ENABLE_RESET") {
            Some(value) => parse_flag(&value).ok_or(ConfigError {
                var: "ENABLE_RESET",
                expected: "a boolean",
                value,
            })?,
            None => false,
        };

        let static_dir = lookup("STATIC_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            enable_reset,
            static_dir,
            database_url,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(!config.enable_reset);
        assert!(config.static_dir.is_none());
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn cors_origins_split_and_trimmed() {
        let config = config_from(&[("CORS_ORIGINS", "http://a.test, ,http://b.test")]).unwrap();
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn invalid_port_rejected() {
        let err = config_from(&[("PORT", "shell")]).unwrap_err();
        assert_eq!(err.var, "PORT");
    }

    #[test]
    fn reset_flag_parsing() {
        assert!(config_from(&[("ENABLE_RESET", "true")]).unwrap().enable_reset);
        assert!(config_from(&[("ENABLE_RESET", "1")]).unwrap().enable_reset);
        assert!(!config_from(&[("ENABLE_RESET", "off")]).unwrap().enable_reset);
        assert!(config_from(&[("ENABLE_RESET", "maybe")]).is_err());
    }
}
