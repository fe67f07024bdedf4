use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("TOML serialization error: {0}")]
    #[diagnostic(
        code(skiff_config::toml_serialize),
        help("Check your configuration structure for invalid values")
    )]
    TomlSerError(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    #[diagnostic(
        code(skiff_config::toml_deserialize),
        help("Check your config.toml syntax and structure")
    )]
    TomlDeError(#[from] toml::de::Error),

    #[error("Configuration file already exists")]
    #[diagnostic(
        code(skiff_config::already_exists),
        help("Remove the existing config file or use a different location")
    )]
    ConfigAlreadyExists,

    #[error("Invalid instance: {0}")]
    #[diagnostic(
        code(skiff_config::invalid_instance),
        help("Check available instances in your config file")
    )]
    InvalidInstance(String),

    #[error("Missing default instance: {0}")]
    #[diagnostic(
        code(skiff_config::missing_default_instance),
        help("Ensure the default_instance field references an existing instance")
    )]
    MissingDefaultInstance(String),

    #[error("Missing instance: {0}")]
    #[diagnostic(
        code(skiff_config::missing_instance),
        help("Add the instance to your configuration or use an existing one")
    )]
    MissingInstance(String),

    #[error("Empty path")]
    #[diagnostic(code(skiff_config::empty_path))]
    EmptyPath,

    #[error("Unable to determine current directory")]
    #[diagnostic(code(skiff_config::current_dir))]
    CurrentDir {
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    #[diagnostic(code(skiff_config::io))]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
