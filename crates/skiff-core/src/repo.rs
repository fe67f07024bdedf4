use skiff_config::instance::Instance;
use tracing::debug;
use url::Url;

use crate::{
    error::SkiffError,
    masterlist::{fetch_master_list, MasterListEntry, DEFAULT_MASTER_LIST_URL},
    registry::{Registry, RegistryStore, Repository},
    SkiffResult,
};

/// The canonical repository directory, sorted by name, with the width of
/// the longest name as an alignment hint for fixed-width display.
#[derive(Debug)]
pub struct MasterListing {
    pub entries: Vec<MasterListEntry>,
    pub max_name_len: usize,
}

/// Result of [`add`]: the entry as registered, and whether an existing
/// entry with the same name was replaced.
#[derive(Debug)]
pub struct AddOutcome {
    pub entry: Repository,
    pub replaced: bool,
}

/// Result of [`forget`]. Forgetting an unregistered name is reported, not
/// raised: nothing was mutated, so the operation still succeeds.
#[derive(Debug)]
pub enum ForgetOutcome {
    Removed {
        entry: Repository,
        default_cleared: bool,
    },
    NotFound {
        name: String,
    },
}

/// Fetches the canonical repository directory.
///
/// Does not touch the local registry. `master_url` falls back to
/// [`DEFAULT_MASTER_LIST_URL`].
pub fn available(master_url: Option<&str>) -> SkiffResult<MasterListing> {
    let url = master_url.unwrap_or(DEFAULT_MASTER_LIST_URL);
    debug!(url = url, "fetching repository master list");

    let mut entries = fetch_master_list(url)?;
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let max_name_len = entries.iter().map(|entry| entry.name.len()).max().unwrap_or(0);

    Ok(MasterListing {
        entries,
        max_name_len,
    })
}

/// Lists the repositories registered with `instance`, sorted by name.
pub fn list(instance: &Instance) -> SkiffResult<Vec<Repository>> {
    let registry = RegistryStore::for_instance(instance)?.load()?;

    Ok(registry
        .repositories
        .into_iter()
        .map(|(name, url)| Repository { name, url })
        .collect())
}

/// Registers `name` → `url` with `instance`.
///
/// Adding a name that already exists replaces its URL; the outcome reports
/// the replacement so callers can word it as an update.
pub fn add(instance: &Instance, name: &str, url: &str) -> SkiffResult<AddOutcome> {
    if name.trim().is_empty() {
        return Err(SkiffError::InvalidRepositoryName(name.to_string()));
    }

    Url::parse(url).map_err(|err| SkiffError::InvalidRepositoryUrl {
        url: url.to_string(),
        source: err,
    })?;

    let store = RegistryStore::for_instance(instance)?;
    let mut registry = store.load()?;

    let previous = registry.upsert(name, url);
    store.save(&registry)?;

    debug!(name = name, url = url, replaced = previous.is_some(), "repository added");

    Ok(AddOutcome {
        entry: Repository {
            name: name.to_string(),
            url: url.to_string(),
        },
        replaced: previous.is_some(),
    })
}

/// Removes `name` from the registry of `instance`.
///
/// If the removed entry was the default, the default pointer is cleared as
/// part of the same save.
pub fn forget(instance: &Instance, name: &str) -> SkiffResult<ForgetOutcome> {
    let store = RegistryStore::for_instance(instance)?;
    let mut registry = store.load()?;

    let was_default = registry.default_repository.as_deref() == Some(name);
    let Some(url) = registry.remove(name) else {
        return Ok(ForgetOutcome::NotFound {
            name: name.to_string(),
        });
    };

    store.save(&registry)?;
    debug!(name = name, default_cleared = was_default, "repository forgotten");

    Ok(ForgetOutcome::Removed {
        entry: Repository {
            name: name.to_string(),
            url,
        },
        default_cleared: was_default,
    })
}

/// Designates the default repository of `instance`.
///
/// `target` is a registered name, or the URL of a registered entry which is
/// then resolved back to its name.
pub fn set_default(instance: &Instance, target: &str) -> SkiffResult<Repository> {
    let store = RegistryStore::for_instance(instance)?;
    let mut registry = store.load()?;

    let entry = resolve_target(&registry, target)
        .ok_or_else(|| SkiffError::RepositoryNotFound(target.to_string()))?;

    registry.set_default(&entry.name)?;
    store.save(&registry)?;
    debug!(name = %entry.name, "default repository set");

    Ok(entry)
}

fn resolve_target(registry: &Registry, target: &str) -> Option<Repository> {
    if let Some(entry) = registry.get(target) {
        return Some(entry);
    }
    registry.find_by_url(target).map(|name| Repository {
        name: name.to_string(),
        url: target.to_string(),
    })
}
