//! Service settings
//!
//! Sources, lowest priority first: built-in defaults, an optional
//! `notes.toml` in the working directory, then `NOTES__*` environment
//! variables (`NOTES__SERVER__PORT=8080`, `NOTES__SESSION__TTL_SECONDS=3600`).

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_SESSION_TTL_SECONDS: u64 = 7 * 24 * 3600;

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Server {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    /// Lifetime of a login session in seconds
    pub ttl_seconds: u64,
    /// Mark the session cookie `Secure` (HTTPS only)
    pub cookie_secure: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub session: Session,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: Server {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            session: Session {
                ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
                cookie_secure: false,
            },
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::build(Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix("NOTES")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    fn build(environment: Environment) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("session.ttl_seconds", DEFAULT_SESSION_TTL_SECONDS as i64)?
            .set_default("session.cookie_secure", false)?
            .add_source(File::with_name("notes").required(false))
            .add_source(environment)
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn environment_with(vars: &[(&str, &str)]) -> Environment {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Settings::environment().source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::build(environment_with(&[])).unwrap();

        assert_eq!(settings.server.bind_address(), "0.0.0.0:5000");
        assert_eq!(settings.session.ttl_seconds, 604800);
        assert!(!settings.session.cookie_secure);
    }

    #[test]
    fn test_environment_overrides() {
        let settings = Settings::build(environment_with(&[
            ("NOTES__SERVER__PORT", "8080"),
            ("NOTES__SESSION__TTL_SECONDS", "60"),
            ("NOTES__SESSION__COOKIE_SECURE", "true"),
        ]))
        .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.session.ttl_seconds, 60);
        assert!(settings.session.cookie_secure);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = Settings::build(environment_with(&[("NOTES__SERVER__PORT", "not-a-port")]));
        assert!(result.is_err());
    }
}
