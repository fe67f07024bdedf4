use nu_ansi_term::Color::{Blue, Cyan, Green};
use skiff_config::{config::Config, instance::Instance};
use skiff_core::{repo, SkiffResult};
use tracing::{info, warn};

use crate::utils::Colored;

pub fn available_repositories(config: &Config) -> SkiffResult<()> {
    info!("Listing all (canonical) available repositories:");

    let listing = repo::available(config.master_list_url.as_deref())?;
    for entry in &listing.entries {
        let padded = format!("{:<width$}", entry.name, width = listing.max_name_len);
        info!(
            name = entry.name,
            uri = entry.uri,
            "  {}: {}",
            Colored(Blue, padded),
            entry.uri
        );
    }

    Ok(())
}

pub fn list_repositories(instance: &Instance) -> SkiffResult<()> {
    let repos = repo::list(instance)?;

    if repos.is_empty() {
        info!("No repositories registered.");
        return Ok(());
    }

    info!("Listing all known repositories:");

    let max_name_len = repos.iter().map(|repo| repo.name.len()).max().unwrap_or(0);
    for repo in &repos {
        let padded = format!("{:<width$}", repo.name, width = max_name_len);
        info!(
            name = repo.name,
            url = repo.url,
            "  {}: {}",
            Colored(Blue, padded),
            repo.url
        );
    }

    Ok(())
}

pub fn add_repository(instance: &Instance, name: &str, url: &str) -> SkiffResult<()> {
    let outcome = repo::add(instance, name, url)?;

    if outcome.replaced {
        info!(
            name = outcome.entry.name,
            url = outcome.entry.url,
            "Updated repository '{}' to {}",
            Colored(Cyan, &outcome.entry.name),
            outcome.entry.url
        );
    } else {
        info!(
            name = outcome.entry.name,
            url = outcome.entry.url,
            "Added repository '{}': {}",
            Colored(Cyan, &outcome.entry.name),
            outcome.entry.url
        );
    }

    Ok(())
}

pub fn forget_repository(instance: &Instance, name: &str) -> SkiffResult<()> {
    match repo::forget(instance, name)? {
        repo::ForgetOutcome::Removed {
            entry,
            default_cleared,
        } => {
            info!(
                name = entry.name,
                url = entry.url,
                "Forgot repository '{}'",
                Colored(Cyan, &entry.name)
            );
            if default_cleared {
                info!("Default repository cleared");
            }
        }
        repo::ForgetOutcome::NotFound { name } => {
            warn!(
                name = name,
                "Repository '{}' is not registered; nothing to forget", name
            );
        }
    }

    Ok(())
}

pub fn default_repository(instance: &Instance, target: &str) -> SkiffResult<()> {
    let entry = repo::set_default(instance, target)?;

    info!(
        name = entry.name,
        url = entry.url,
        "Default repository set to '{}' ({})",
        Colored(Green, &entry.name),
        entry.url
    );

    Ok(())
}
