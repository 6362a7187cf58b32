// Configuration module entry point
// Loads layered configuration and owns the startup-time application state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::{AppState, StaticMount};
pub use types::{Config, LoggingConfig, PerformanceConfig, ServerConfig, StaticFilesConfig};

impl Config {
    /// Load configuration from the default "config.toml" file if present
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// Sources are layered: programmatic defaults, then an optional config
    /// file, then `SERVER`-prefixed environment variables. With no file and
    /// no environment the defaults bind 0.0.0.0:8000 and mount a directory
    /// named "static" when it exists.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("static_files.url_prefix", "/static")?
            .set_default("static_files.directory", "static")?
            .set_default("static_files.index_files", vec!["index.html", "index.htm"])?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
