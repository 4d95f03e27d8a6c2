use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use serde::Deserialize;
use tracing::warn;

pub const CONFIGURATION_PATH_ENV: &str = "ACTIVITIES_CONFIGURATION";
pub const DEFAULT_CONFIGURATION_PATH: &str = "configuration.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    #[serde(default = "default_listen_address")]
    pub listen_address: SocketAddr,
    #[serde(default = "default_static_directory")]
    pub static_directory: PathBuf
}

fn default_listen_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8000))
}

fn default_static_directory() -> PathBuf {
    PathBuf::from("static")
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            static_directory: default_static_directory()
        }
    }
}

impl Configuration {
    /// Path of the configuration file, `ACTIVITIES_CONFIGURATION` taking precedence over
    /// `configuration.toml` in the working directory.
    pub fn path() -> PathBuf {
        std::env::var_os(CONFIGURATION_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIGURATION_PATH))
    }

    /// Loads the configuration from `path`. A missing file yields the defaults, a malformed one is an error.
    pub async fn load(path: &Path) -> eyre::Result<Self> {
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Configuration file {:?} not found, using defaults", path);
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into())
        };

        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> eyre::Result<Self> {
        Ok(toml::from_str::<Configuration>(contents)?)
    }
}
