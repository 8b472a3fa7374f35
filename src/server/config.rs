use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

/// Environment variable consulted when `--listen` is not given
pub const LISTEN_ENV: &str = "WORDLE_PAL_LISTEN";

pub const DEFAULT_LISTEN: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub listen: SocketAddr,
}

impl ServerConfig {
    /// Resolve the listen address: flag, then environment, then default
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen address does not parse.
    pub fn resolve(flag: Option<&str>) -> Result<Self> {
        Self::from_sources(flag, env::var(LISTEN_ENV).ok().as_deref())
    }

    fn from_sources(flag: Option<&str>, env_value: Option<&str>) -> Result<Self> {
        let raw = flag
            .or(env_value)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_LISTEN);

        Ok(Self {
            listen: parse_listen(raw)?,
        })
    }
}

/// Parse `host:port`, treating a bare `:port` as all interfaces
fn parse_listen(raw: &str) -> Result<SocketAddr> {
    let full = if raw.starts_with(':') {
        format!("0.0.0.0{raw}")
    } else {
        raw.to_string()
    };
    full.parse()
        .with_context(|| format!("Invalid listen address '{raw}'"))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_env() {
        let config = ServerConfig::from_sources(Some("127.0.0.1:9000"), Some("127.0.0.1:7000")).unwrap();
        assert_eq!(config.listen.port(), 9000);
    }

    #[test]
    fn env_used_without_flag() {
        let config = ServerConfig::from_sources(None, Some("127.0.0.1:7000")).unwrap();
        assert_eq!(config.listen.port(), 7000);
    }

    #[test]
    fn default_when_unset() {
        let config = ServerConfig::from_sources(None, None).unwrap();
        assert_eq!(config, ServerConfig::default());

        let blank = ServerConfig::from_sources(Some("  "), None).unwrap();
        assert_eq!(blank, ServerConfig::default());
    }

    #[test]
    fn bare_port_binds_all_interfaces() {
        let config = ServerConfig::from_sources(Some(":8080"), None).unwrap();
        assert_eq!(config.listen, SocketAddr::from(([0, 0, 0, 0], 8080)));
    }

    #[test]
    fn invalid_address_is_error() {
        assert!(ServerConfig::from_sources(Some("not-an-address"), None).is_err());
        assert!(ServerConfig::from_sources(None, Some("127.0.0.1:99999")).is_err());
    }
}
