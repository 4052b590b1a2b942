use log::warn;
use std::env;

/// Bind address for the static host, overridable via HOST / PORT.
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: port_from_env(),
        }
    }
}

fn port_from_env() -> u16 {
    match env::var("PORT") {
        Ok(raw) => raw.parse().unwrap_or_else(|err| {
            warn!("invalid PORT value {raw:?}: {err}; using 8080");
            8080
        }),
        Err(_) => 8080,
    }
}
