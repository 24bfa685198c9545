use anyhow::Context;
use std::{env, net::IpAddr, str::FromStr};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub host: IpAddr,
    pub port: u16,
    pub cors_allowed_origin: String,
    pub max_request_body_mb: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let required = |key: &str| lookup(key).with_context(|| format!("{key} must be set"));

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            database_max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            jwt_secret: required("JWT_SECRET")?,
            host: parse_or(&lookup, "HOST", IpAddr::from([0, 0, 0, 0]))?,
            port: parse_or(&lookup, "PORT", 8080)?,
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            max_request_body_mb: parse_or(&lookup, "MAX_REQUEST_BODY_MB", 1)?,
        })
    }
}

fn parse_or<T>(lookup: impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(value) => value
            .parse()
            .with_context(|| format!("{key} has an invalid value: {value:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn applies_defaults() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/interviews"),
            ("JWT_SECRET", "secret"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, IpAddr::from([0, 0, 0, 0]));
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.cors_allowed_origin, "http://localhost:3000");
        assert_eq!(config.max_request_body_mb, 1);
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("DATABASE_URL", "postgres://db/interviews"),
            ("JWT_SECRET", "secret"),
            ("PORT", "9090"),
            ("HOST", "127.0.0.1"),
            ("CORS_ALLOWED_ORIGIN", "*"),
        ])
        .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.host, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(config.cors_allowed_origin, "*");
    }

    #[test]
    fn missing_secret_is_an_error() {
        let err = load(&[("DATABASE_URL", "postgres://db/interviews")]).unwrap_err();
        assert_eq!(err.to_string(), "JWT_SECRET must be set");
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = load(&[
            ("DATABASE_URL", "postgres://db/interviews"),
            ("JWT_SECRET", "secret"),
            ("PORT", "eighty"),
        ])
        .unwrap_err();
        assert!(err.to_string().starts_with("PORT has an invalid value"));
    }
}
