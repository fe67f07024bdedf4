use std::{env, path::PathBuf};

use crate::error::{ConfigError, Result};

/// Resolves a path string to an absolute path.
///
/// A leading `~` expands to the user's home directory; relative paths are
/// resolved against the current working directory.
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let path = path.trim();

    if path.is_empty() {
        return Err(ConfigError::EmptyPath);
    }

    let expanded = if let Some(rest) = path.strip_prefix("~") {
        let rest = rest.strip_prefix('/').unwrap_or(rest);
        home_dir().join(rest)
    } else {
        PathBuf::from(path)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|err| ConfigError::CurrentDir { source: err })
    }
}

pub fn home_dir() -> PathBuf {
    env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/root"))
}

/// Returns the user's config directory following the XDG Base Directory
/// Specification (`$XDG_CONFIG_HOME`, defaulting to `$HOME/.config`).
pub fn xdg_config_home() -> PathBuf {
    env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns the user's data directory following the XDG Base Directory
/// Specification (`$XDG_DATA_HOME`, defaulting to `$HOME/.local/share`).
pub fn xdg_data_home() -> PathBuf {
    env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/share"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::with_env;

    #[test]
    fn test_resolve_path_absolute() {
        let resolved = resolve_path("/tmp/skiff").unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/skiff"));
    }

    #[test]
    fn test_resolve_path_empty() {
        assert!(matches!(resolve_path("  "), Err(ConfigError::EmptyPath)));
    }

    #[test]
    fn test_resolve_path_tilde() {
        with_env(vec![("HOME", "/home/tester")], || {
            let resolved = resolve_path("~/data").unwrap();
            assert_eq!(resolved, PathBuf::from("/home/tester/data"));
        });
    }

    #[test]
    fn test_resolve_path_relative() {
        let resolved = resolve_path("some/dir").unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("some/dir"));
    }

    #[test]
    fn test_xdg_config_home_env() {
        with_env(vec![("XDG_CONFIG_HOME", "/custom/config")], || {
            assert_eq!(xdg_config_home(), PathBuf::from("/custom/config"));
        });
    }

    #[test]
    fn test_xdg_data_home_env() {
        with_env(vec![("XDG_DATA_HOME", "/custom/data")], || {
            assert_eq!(xdg_data_home(), PathBuf::from("/custom/data"));
        });
    }
}
