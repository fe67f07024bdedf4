use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{error::Result, paths::resolve_path};

/// An instance is one managed client installation with its own registry.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Instance {
    /// Root directory for this instance's data.
    ///
    /// The repository registry is stored in `root_path/registry.json`.
    pub root_path: String,
}

impl Instance {
    pub fn get_root_path(&self) -> Result<PathBuf> {
        if let Ok(env_path) = std::env::var("SKIFF_ROOT") {
            return Ok(resolve_path(&env_path)?);
        }
        Ok(resolve_path(&self.root_path)?)
    }

    pub fn get_registry_path(&self) -> Result<PathBuf> {
        Ok(self.get_root_path()?.join("registry.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::with_env;

    #[test]
    fn test_registry_path_under_root() {
        let instance = Instance {
            root_path: "/opt/skiff/main".to_string(),
        };
        let path = instance.get_registry_path().unwrap();
        assert_eq!(path, PathBuf::from("/opt/skiff/main/registry.json"));
    }

    #[test]
    fn test_root_path_env_override() {
        let instance = Instance {
            root_path: "/opt/skiff/main".to_string(),
        };
        with_env(vec![("SKIFF_ROOT", "/custom/root")], || {
            let path = instance.get_root_path().unwrap();
            assert_eq!(path, PathBuf::from("/custom/root"));
        });
    }
}
