use anyhow::{anyhow, Result};
use std::env;

pub const DEBUG_VAR: &str = "SPATIA_GEOCODER_DEBUG";
pub const PORT_VAR: &str = "SPATIA_GEOCODER_PORT";

const DEFAULT_PORT: u16 = 7788;

/// Process-wide configuration, read from the environment once at startup
/// and passed around by value afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub debug: bool,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_values(env::var(DEBUG_VAR).ok(), env::var(PORT_VAR).ok())
    }

    fn from_values(debug: Option<String>, port: Option<String>) -> Result<Self> {
        let debug = debug.as_deref().map(is_truthy).unwrap_or(false);
        let port = match port {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| anyhow!("{PORT_VAR} must be a port number, got {value:?}"))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { debug, port })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
