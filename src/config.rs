use std::env;
use std::time::Duration;

use tracing::warn;

/// Simulated round-trip delays applied by the form layer before a
/// transition is dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Latency {
    /// Create and update submissions.
    pub submit: Duration,
    pub delete: Duration,
    /// Settings form.
    pub config: Duration,
}

impl Latency {
    pub fn none() -> Self {
        Self {
            submit: Duration::ZERO,
            delete: Duration::ZERO,
            config: Duration::ZERO,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            submit: Duration::from_millis(1500),
            delete: Duration::from_millis(1000),
            config: Duration::from_millis(2000),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Comma separated origins, or `*` for any.
    pub cors_origins: String,
    pub environment: String,
    pub latency: Latency,
}

impl ServerConfig {
    /// Read settings from the process environment, falling back to
    /// development defaults. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Self {
        let defaults = Latency::default();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env_parse("PORT", 8080),
            cors_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".to_string()),
            // Railway sets RAILWAY_ENVIRONMENT_NAME
            environment: env::var("RAILWAY_ENVIRONMENT_NAME")
                .or_else(|_| env::var("ENVIRONMENT"))
                .unwrap_or_else(|_| "development".to_string()),
            latency: Latency {
                submit: env_millis("SUBMIT_DELAY_MS", defaults.submit),
                delete: env_millis("DELETE_DELAY_MS", defaults.delete),
                config: env_millis("CONFIG_DELAY_MS", defaults.config),
            },
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cors_origins: "http://localhost:3000,http://localhost:5173".to_string(),
            environment: "development".to_string(),
            latency: Latency::default(),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "Unparseable environment value, using default");
            default
        }),
        Err(_) => default,
    }
}

fn env_millis(key: &str, default: Duration) -> Duration {
    Duration::from_millis(env_parse(key, default.as_millis() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_latency_matches_form_delays() {
        let latency = Latency::default();
        assert_eq!(latency.submit, Duration::from_millis(1500));
        assert_eq!(latency.delete, Duration::from_millis(1000));
        assert_eq!(latency.config, Duration::from_millis(2000));
    }

    #[test]
    fn bind_address_joins_host_and_port() {
        let config = ServerConfig {
            port: 9000,
            ..Default::default()
        };
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert!(config.is_development());
    }
}
