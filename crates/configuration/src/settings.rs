use crate::error::ConfigError;
use serde::Deserialize;
use std::net::IpAddr;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub provider: Provider,
    pub correlation: Correlation,
}

/// Where the HTTP server binds.
#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub host: IpAddr,
    pub port: u16,
}

/// How to reach the upstream evaluation service.
#[derive(Debug, Clone, Deserialize)]
pub struct Provider {
    /// Base URL of the evaluation service, e.g. "http://20.244.56.144/evaluation-service".
    pub base_url: String,
}

/// Parameters for the correlation endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Correlation {
    /// The ordered symbol universe used by the matrix view (N=8 in the
    /// reference deployment). Order determines matrix row/column order.
    pub symbol_universe: Vec<String>,
    /// The trailing window, in minutes, applied when a request omits `minutes`.
    #[serde(default = "default_minutes")]
    pub default_minutes: u32,
}

fn default_minutes() -> u32 {
    50
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.correlation.symbol_universe.is_empty() {
            return Err(ConfigError::ValidationError(
                "correlation.symbol_universe must not be empty".to_string(),
            ));
        }
        if self.correlation.default_minutes == 0 {
            return Err(ConfigError::ValidationError(
                "correlation.default_minutes must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Settings {
        Settings {
            server: Server {
                host: "0.0.0.0".parse().unwrap(),
                port: 3001,
            },
            provider: Provider {
                base_url: "http://localhost:9000/evaluation-service".to_string(),
            },
            correlation: Correlation {
                symbol_universe: vec!["NVDA".into(), "PYPL".into()],
                default_minutes: 50,
            },
        }
    }

    #[test]
    fn valid_settings_pass_validation() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn empty_universe_is_rejected() {
        let mut settings = sample();
        settings.correlation.symbol_universe.clear();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn zero_window_is_rejected() {
        let mut settings = sample();
        settings.correlation.default_minutes = 0;
        assert!(settings.validate().is_err());
    }
}
