//! Process settings from `PMG_*` environment variables.

use std::env;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use pushgauge_core::error::{PushGaugeError, Result};

pub const ENV_PORT: &str = "PMG_PORT";
pub const ENV_CONFIG_FILE: &str = "PMG_CONFIGFILE";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CONFIG_FILE: &str = "./metrics.config";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub port: u16,
    pub config_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unset variables take their defaults; a set but unparsable port is an
    /// error, never silently replaced.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut s = Settings::default();

        if let Some(raw) = lookup(ENV_PORT) {
            s.port = raw.trim().parse().map_err(|e| {
                PushGaugeError::Config(format!("{ENV_PORT}={raw:?} is not a valid port: {e}"))
            })?;
        }
        if let Some(path) = lookup(ENV_CONFIG_FILE) {
            if path.is_empty() {
                return Err(PushGaugeError::Config(format!("{ENV_CONFIG_FILE} must not be empty")));
            }
            s.config_file = PathBuf::from(path);
        }

        Ok(s)
    }

    /// Listen on every interface.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let s = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(s.port, 8080);
        assert_eq!(s.config_file, PathBuf::from("./metrics.config"));
        assert_eq!(s.listen_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn overrides_from_env() {
        let s = Settings::from_lookup(lookup(&[
            ("PMG_PORT", "9100"),
            ("PMG_CONFIGFILE", "/etc/pmg/metrics.yaml"),
        ]))
        .unwrap();
        assert_eq!(s.port, 9100);
        assert_eq!(s.config_file, PathBuf::from("/etc/pmg/metrics.yaml"));
    }

    #[test]
    fn bad_port_is_fatal() {
        for raw in ["http", "-1", "70000", ""] {
            let err = Settings::from_lookup(lookup(&[("PMG_PORT", raw)])).unwrap_err();
            assert_eq!(err.client_code().as_str(), "CONFIG", "{raw}");
        }
    }
}
