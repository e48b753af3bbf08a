use std::{env, time::Duration};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub upstream: UpstreamConfig,
}

/// Where the product service lives and how long we wait for it.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            connect_timeout: Duration::from_secs(1),
            timeout: Duration::from_secs(5),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5000);

        let defaults = UpstreamConfig::default();
        let upstream = UpstreamConfig {
            base_url: env::var("UPSTREAM_BASE_URL").unwrap_or(defaults.base_url),
            connect_timeout: millis_from_env("UPSTREAM_CONNECT_TIMEOUT_MS")
                .unwrap_or(defaults.connect_timeout),
            timeout: millis_from_env("UPSTREAM_TIMEOUT_MS").unwrap_or(defaults.timeout),
        };

        Ok(Self {
            host,
            port,
            upstream,
        })
    }
}

fn millis_from_env(key: &str) -> Option<Duration> {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_millis)
}
