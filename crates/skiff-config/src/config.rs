use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    sync::{LazyLock, RwLock},
};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::{ConfigError, Result},
    instance::Instance,
    paths::{xdg_config_home, xdg_data_home},
};

/// Application's configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
    /// The name of the default instance to use.
    pub default_instance: String,

    /// A map of instance names to their configurations.
    pub instance: HashMap<String, Instance>,

    /// URL of the canonical repository directory.
    ///
    /// Defaults to the built-in master list URL when unset.
    pub master_list_url: Option<String>,
}

pub static CONFIG: LazyLock<RwLock<Option<Config>>> = LazyLock::new(|| RwLock::new(None));
pub static CURRENT_INSTANCE: LazyLock<RwLock<Option<String>>> = LazyLock::new(|| RwLock::new(None));

pub static CONFIG_PATH: LazyLock<RwLock<PathBuf>> = LazyLock::new(|| {
    RwLock::new(match std::env::var("SKIFF_CONFIG") {
        Ok(path_str) => PathBuf::from(path_str),
        Err(_) => xdg_config_home().join("skiff").join("config.toml"),
    })
});

pub fn init() -> Result<()> {
    let config = Config::new()?;
    let mut global_config = CONFIG.write().unwrap();
    *global_config = Some(config);
    Ok(())
}

fn ensure_config_initialized() {
    let mut config_guard = CONFIG.write().unwrap();
    if config_guard.is_none() {
        *config_guard = Some(Config::default_config());
    }
}

pub fn get_config() -> Config {
    {
        let config_guard = CONFIG.read().unwrap();
        if config_guard.is_some() {
            drop(config_guard);
            return CONFIG.read().unwrap().as_ref().unwrap().clone();
        }
    }

    ensure_config_initialized();

    CONFIG.read().unwrap().as_ref().unwrap().clone()
}

pub fn get_current_instance() -> String {
    let current_instance = CURRENT_INSTANCE.read().unwrap();
    current_instance
        .clone()
        .unwrap_or_else(|| get_config().default_instance.clone())
}

pub fn set_current_instance(name: &str) -> Result<()> {
    let config = get_config();
    if !config.instance.contains_key(name) {
        return Err(ConfigError::InvalidInstance(name.to_string()));
    }
    let mut instance = CURRENT_INSTANCE.write().unwrap();
    *instance = Some(name.to_string());
    Ok(())
}

impl Config {
    pub fn default_config() -> Self {
        let skiff_root = std::env::var("SKIFF_ROOT")
            .unwrap_or_else(|_| format!("{}/skiff", xdg_data_home().display()));

        let default_instance = Instance {
            root_path: skiff_root,
        };
        let default_instance_name = "default".to_string();

        Self {
            instance: HashMap::from([(default_instance_name.clone(), default_instance)]),
            default_instance: default_instance_name,
            master_list_url: None,
        }
    }

    /// Creates a new configuration by loading it from the configuration file.
    /// If the configuration file is not found, it uses the default configuration.
    pub fn new() -> Result<Self> {
        let config_path = CONFIG_PATH.read().unwrap().to_path_buf();

        let config = match fs::read_to_string(&config_path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default_config(),
            Err(err) => return Err(ConfigError::IoError(err)),
        };

        config.resolve()?;

        Ok(config)
    }

    pub fn resolve(&self) -> Result<()> {
        if !self.instance.contains_key(&self.default_instance) {
            return Err(ConfigError::MissingDefaultInstance(
                self.default_instance.clone(),
            ));
        }

        Ok(())
    }

    pub fn default_instance(&self) -> Result<&Instance> {
        self.instance
            .get(&self.default_instance)
            .ok_or_else(|| ConfigError::MissingDefaultInstance(self.default_instance.clone()))
    }

    pub fn get_instance(&self, name: &str) -> Result<&Instance> {
        self.instance
            .get(name)
            .ok_or(ConfigError::MissingInstance(name.to_string()))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = CONFIG_PATH.read().unwrap().to_path_buf();
        let serialized = toml::to_string_pretty(self)?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, serialized)?;
        info!("Configuration saved to {}", config_path.display());
        Ok(())
    }
}

pub fn generate_default_config() -> Result<()> {
    let config_path = CONFIG_PATH.read().unwrap().to_path_buf();

    if config_path.exists() {
        return Err(ConfigError::ConfigAlreadyExists);
    }

    let def_config = Config::default_config();
    let serialized = toml::to_string_pretty(&def_config)?;

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&config_path, serialized)?;
    info!(
        "Default configuration file generated at: {}",
        config_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ConfigError, test_utils::with_env};

    #[test]
    fn test_default_config_creation() {
        let config = Config::default_config();

        assert_eq!(config.default_instance, "default");
        assert!(config.instance.contains_key("default"));
        assert!(config.master_list_url.is_none());
    }

    #[test]
    fn test_config_resolve_missing_default_instance() {
        let mut config = Config::default_config();
        config.default_instance = "nonexistent".to_string();

        let result = config.resolve();
        assert!(matches!(result, Err(ConfigError::MissingDefaultInstance(_))));
    }

    #[test]
    fn test_get_instance() {
        let config = Config::default_config();

        let instance = config.get_instance("default");
        assert!(instance.is_ok());

        let missing = config.get_instance("nonexistent");
        assert!(matches!(missing, Err(ConfigError::MissingInstance(_))));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default_config();
        let serialized = toml::to_string(&config);
        assert!(serialized.is_ok());

        let deserialized: std::result::Result<Config, _> = toml::from_str(&serialized.unwrap());
        assert!(deserialized.is_ok());
    }

    #[test]
    fn test_config_new_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
default_instance = "main"
master_list_url = "https://mirror.example.com/repositories.json"

[instance.main]
root_path = "/opt/skiff/main"
"#,
        )
        .unwrap();

        {
            let mut global_path = CONFIG_PATH.write().unwrap();
            *global_path = config_path;
        }

        let config = Config::new().unwrap();
        assert_eq!(config.default_instance, "main");
        assert_eq!(
            config.master_list_url.as_deref(),
            Some("https://mirror.example.com/repositories.json")
        );
        assert_eq!(
            config.get_instance("main").unwrap().root_path,
            "/opt/skiff/main"
        );
    }

    #[test]
    fn test_default_config_root_env_override() {
        with_env(vec![("SKIFF_ROOT", "/custom/skiff")], || {
            let config = Config::default_config();
            let instance = config.default_instance().unwrap();
            assert_eq!(instance.root_path, "/custom/skiff");
        });
    }
}
