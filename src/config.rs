//! Layered configuration of the demo server.
//!
//! Sources, lowest priority first: built-in defaults, the YAML file named by
//! `--config`/`CONFIG_FILE` (or `./config.yaml` when present), `QUARRY_`
//! prefixed environment variables, then explicit CLI flags.

use clap::Parser;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    /// Suffix of every page title.
    pub title: String,
    pub static_dir: String,
}

impl ServerConfig {
    /// `host:port` to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 3000,
                host: "127.0.0.1".to_string(),
            },
            ui: UiConfig {
                title: "Quarry UI".to_string(),
                static_dir: "static".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("server.host", defaults.server.host)?
            .set_default("ui.title", defaults.ui.title)?
            .set_default("ui.static_dir", defaults.ui.static_dir)?;

        // An explicit file must exist; the cwd fallback is optional.
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::new(path, FileFormat::Yaml).required(true));
        } else if Path::new("config.yaml").exists() {
            builder = builder.add_source(File::new("config.yaml", FileFormat::Yaml));
        }

        // E.g. QUARRY_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("QUARRY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(static_dir) = cli.static_dir {
            builder = builder.set_override("ui.static_dir", static_dir)?;
        }

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_parse() {
        let cli = Cli::try_parse_from(["quarry-ui", "--port", "8081", "--host", "0.0.0.0"])
            .expect("valid flags");
        assert_eq!(cli.port, Some(8081));
        assert_eq!(cli.host.as_deref(), Some("0.0.0.0"));
    }

    #[test]
    fn test_address_joins_host_and_port() {
        let config = AppConfig::default();
        assert_eq!(config.server.address(), "127.0.0.1:3000");
    }
}
