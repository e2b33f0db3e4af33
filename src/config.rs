use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub session_secret: String,
    pub service_host: String,
    pub service_port: u16,
    pub template_dir: String,
    pub static_dir: String,
}

const DEFAULT_SESSION_SECRET: &str = "default-secret-key";

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source. `from_env` wires
    /// this to the process environment; tests supply closures.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let session_secret =
            var("SESSION_SECRET").unwrap_or_else(|| DEFAULT_SESSION_SECRET.to_string());

        let service_host = var("SERVICE_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let service_port = var("SERVICE_PORT")
            .unwrap_or_else(|| "5000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let template_dir = var("TEMPLATE_DIR").unwrap_or_else(|| "templates".to_string());

        let static_dir = var("STATIC_DIR").unwrap_or_else(|| "static".to_string());

        Ok(Config {
            session_secret,
            service_host,
            service_port,
            template_dir,
            static_dir,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Session secret: {}",
            if self.session_secret == DEFAULT_SESSION_SECRET { "default" } else { "custom" });
        tracing::info!("  Template directory: {}", self.template_dir);
        tracing::info!("  Static directory: {}", self.static_dir);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
