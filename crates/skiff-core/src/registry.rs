use std::{collections::BTreeMap, fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use skiff_config::instance::Instance;
use tracing::debug;

use crate::{
    error::{ErrorContext, SkiffError},
    SkiffResult,
};

/// A named package source registered with one instance.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Repository {
    /// Unique name of the repository.
    pub name: String,

    /// URL to the repository's metadata file.
    pub url: String,
}

/// The persisted set of repositories for one instance.
///
/// Entries are keyed by name, so names are unique and listing order is
/// stable. `default_repository` must name a registered entry or be unset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Registry {
    #[serde(default)]
    pub repositories: BTreeMap<String, String>,

    #[serde(default)]
    pub default_repository: Option<String>,
}

impl Registry {
    /// Inserts or replaces the entry for `name`, returning the previous URL
    /// if one was registered.
    pub fn upsert(&mut self, name: &str, url: &str) -> Option<String> {
        self.repositories.insert(name.to_string(), url.to_string())
    }

    /// Removes the entry for `name` if present. Removing the default entry
    /// clears the default pointer in the same mutation.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let removed = self.repositories.remove(name);
        if removed.is_some() && self.default_repository.as_deref() == Some(name) {
            self.default_repository = None;
        }
        removed
    }

    pub fn set_default(&mut self, name: &str) -> SkiffResult<()> {
        if !self.repositories.contains_key(name) {
            return Err(SkiffError::RepositoryNotFound(name.to_string()));
        }
        self.default_repository = Some(name.to_string());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Repository> {
        self.repositories.get(name).map(|url| Repository {
            name: name.to_string(),
            url: url.clone(),
        })
    }

    /// Reverse lookup: resolves the name of the first entry registered with
    /// exactly this URL.
    pub fn find_by_url(&self, url: &str) -> Option<&str> {
        self.repositories
            .iter()
            .find(|(_, u)| u.as_str() == url)
            .map(|(name, _)| name.as_str())
    }
}

/// Durable storage for one instance's [`Registry`].
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn for_instance(instance: &Instance) -> SkiffResult<Self> {
        Ok(Self::new(instance.get_registry_path()?))
    }

    /// Loads the registry from disk. A missing file is the empty registry;
    /// unreadable or undecodable content is an error, as is a default
    /// pointer naming an unregistered repository.
    pub fn load(&self) -> SkiffResult<Registry> {
        let registry: Registry = match fs::read_to_string(&self.path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|err| SkiffError::RegistryParse {
                    path: self.path.clone(),
                    source: err,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Registry::default(),
            Err(err) => {
                return Err(SkiffError::IoError {
                    action: format!("reading registry {}", self.path.display()),
                    source: err,
                })
            }
        };

        if let Some(name) = &registry.default_repository {
            if !registry.repositories.contains_key(name) {
                return Err(SkiffError::DanglingDefault {
                    path: self.path.clone(),
                    name: name.clone(),
                });
            }
        }

        Ok(registry)
    }

    /// Persists the registry atomically: the content is written to a
    /// temporary file next to the registry and renamed into place, so a
    /// crash mid-write never leaves a partially written registry.
    pub fn save(&self, registry: &Registry) -> SkiffResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating registry directory {}", parent.display()))?;
        }

        let serialized = serde_json::to_string_pretty(registry)?;
        let tmp_path = self.path.with_extension("json.tmp");

        fs::write(&tmp_path, serialized)
            .with_context(|| format!("writing registry {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("replacing registry {}", self.path.display()))?;

        debug!(path = %self.path.display(), "registry saved");
        Ok(())
    }
}
