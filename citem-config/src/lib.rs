use log::warn;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub mod listener;
pub mod logging;
pub mod registry;

pub use listener::{ListenerConfig, ListenerPriority};
pub use logging::LoggingConfig;
pub use registry::RegistryConfig;

const CONFIG_ROOT_FOLDER: &str = "config/";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't access configuration at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Couldn't parse config at {path:?}. Reason: {message}. This is probably caused by a config update; just delete the old config and load it again")]
    Parse { path: PathBuf, message: String },
    #[error("Couldn't serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Everything the custom item layer can be tuned with.
///
/// The defaults keep the behavior of items exactly as their descriptors
/// declare it.
#[derive(Deserialize, Serialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct CustomItemsConfig {
    pub logging: LoggingConfig,
    pub registry: RegistryConfig,
    pub listener: ListenerConfig,
}

pub trait LoadConfiguration {
    /// Loads the configuration from `<exec_dir>/config/`, writing the defaults
    /// first if the file does not exist yet.
    fn load(exec_dir: &Path) -> Result<Self, ConfigError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let config_dir = exec_dir.join(CONFIG_ROOT_FOLDER);
        if !config_dir.exists() {
            log::debug!("creating new config root folder");
            fs::create_dir_all(&config_dir).map_err(|source| ConfigError::Io {
                path: config_dir.clone(),
                source,
            })?;
        }
        let path = config_dir.join(Self::get_path());

        let config = if path.exists() {
            let file_content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;

            toml::from_str(&file_content).map_err(|err| ConfigError::Parse {
                path: path.clone(),
                message: err.message().to_string(),
            })?
        } else {
            let content = Self::default();

            if let Err(err) = fs::write(&path, toml::to_string(&content)?) {
                warn!("Couldn't write default config to {:?}. Reason: {}", &path, err);
            }

            content
        };

        config.validate()?;
        Ok(config)
    }

    fn get_path() -> &'static Path;

    fn validate(&self) -> Result<(), ConfigError>;
}

impl LoadConfiguration for CustomItemsConfig {
    fn get_path() -> &'static Path {
        Path::new("custom_items.toml")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.logging.validate().map_err(ConfigError::Invalid)
    }
}
