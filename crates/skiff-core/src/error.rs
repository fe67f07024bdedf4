//! Error types for skiff-core.

use std::path::PathBuf;

use miette::Diagnostic;
use skiff_config::error::ConfigError;
use thiserror::Error;

/// Core error type for skiff repository operations.
#[derive(Error, Diagnostic, Debug)]
pub enum SkiffError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Error while {action}")]
    #[diagnostic(code(skiff::io), help("Check file permissions and disk space"))]
    IoError {
        action: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(code(skiff::json))]
    Json(#[from] serde_json::Error),

    #[error("Registry file {path} is corrupt")]
    #[diagnostic(
        code(skiff::registry_corrupt),
        help("Fix or remove the registry file and re-add your repositories")
    )]
    RegistryParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Registry file {path} marks unknown repository '{name}' as default")]
    #[diagnostic(
        code(skiff::registry_dangling_default),
        help("Fix or remove the registry file and re-add your repositories")
    )]
    DanglingDefault { path: PathBuf, name: String },

    #[error("Failed to fetch repository master list from {url}")]
    #[diagnostic(
        code(skiff::master_list_fetch),
        help("Check your internet connection and try again later")
    )]
    MasterListFetch {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("Repository master list at {url} is not a valid repository document")]
    #[diagnostic(
        code(skiff::master_list_decode),
        help("The server may be misbehaving; verify the master list URL")
    )]
    MasterListDecode { url: String },

    #[error("Invalid repository name: {0:?}")]
    #[diagnostic(
        code(skiff::invalid_repository_name),
        help("Repository names must not be empty")
    )]
    InvalidRepositoryName(String),

    #[error("Invalid repository URL: {url}")]
    #[diagnostic(
        code(skiff::invalid_repository_url),
        help("Provide an absolute URL, e.g. https://example.com/repo.json")
    )]
    InvalidRepositoryUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Repository '{0}' is not registered")]
    #[diagnostic(
        code(skiff::repository_not_found),
        help("Run 'skiff list' to see registered repositories")
    )]
    RepositoryNotFound(String),
}

/// Trait for adding context to IO errors.
pub trait ErrorContext<T> {
    fn with_context<C>(self, context: C) -> std::result::Result<T, SkiffError>
    where
        C: FnOnce() -> String;
}

impl<T> ErrorContext<T> for std::io::Result<T> {
    fn with_context<C>(self, context: C) -> std::result::Result<T, SkiffError>
    where
        C: FnOnce() -> String,
    {
        self.map_err(|err| SkiffError::IoError {
            action: context(),
            source: err,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_context() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result
            .with_context(|| "writing registry".to_string())
            .unwrap_err();
        assert!(matches!(err, SkiffError::IoError { .. }));
        assert_eq!(err.to_string(), "Error while writing registry");
    }

    #[test]
    fn test_repository_not_found_display() {
        let err = SkiffError::RepositoryNotFound("Squad".to_string());
        assert_eq!(err.to_string(), "Repository 'Squad' is not registered");
    }

    #[test]
    fn test_master_list_fetch_display() {
        let err = SkiffError::MasterListFetch {
            url: "http://example.com/repositories.json".to_string(),
            source: Box::new(ureq::Error::ConnectionFailed),
        };
        assert!(err.to_string().contains("http://example.com/repositories.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
