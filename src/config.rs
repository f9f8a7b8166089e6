use serde::{Deserialize, Serialize};

pub const DEFAULT_MOVIES_FILE: &str = "Movies_Json.txt";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    pub movies_file: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config` file and
    /// `MOVIEDB_*` environment variables, in that order of precedence.
    ///
    /// `_` separates nested keys, so only single-word keys such as
    /// `MOVIEDB_SERVER_PORT` can be set from the environment. Set
    /// `data.movies_file` in the config file, or use `MOVIES_FILE`.
    pub fn load() -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("MOVIEDB")
                    .separator("_")
                    .prefix_separator("_"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Path of the data file loaded at startup
    pub fn movies_file(&self) -> String {
        if let Some(path) = &self.data.movies_file {
            return path.clone();
        }

        std::env::var("MOVIES_FILE").unwrap_or_else(|_| DEFAULT_MOVIES_FILE.to_string())
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
