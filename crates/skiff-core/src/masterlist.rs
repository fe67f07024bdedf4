use serde::{Deserialize, Serialize};

use crate::{error::SkiffError, http::SHARED_AGENT, SkiffResult};

/// URL of the canonical repository directory, used when neither the
/// configuration nor the caller provides one.
pub const DEFAULT_MASTER_LIST_URL: &str = "https://repo.skiffpm.dev/repositories.json";

/// One repository advertised by the master list. Transient, never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MasterListEntry {
    pub name: String,
    pub uri: String,
}

/// Wire shape of the master list document:
/// `{"repositories":[{"name":...,"uri":...},...]}`.
#[derive(Debug, Deserialize)]
pub struct MasterList {
    pub repositories: Vec<MasterListEntry>,
}

/// Fetches the canonical repository directory from `url`.
///
/// Performs exactly one request through the shared agent; transport
/// failures and non-success statuses surface as [`SkiffError::MasterListFetch`],
/// an undecodable body as [`SkiffError::MasterListDecode`].
pub fn fetch_master_list(url: &str) -> SkiffResult<Vec<MasterListEntry>> {
    let mut response = SHARED_AGENT
        .get(url)
        .call()
        .map_err(|err| SkiffError::MasterListFetch {
            url: url.to_string(),
            source: Box::new(err),
        })?;

    let list: MasterList =
        response
            .body_mut()
            .read_json()
            .map_err(|_| SkiffError::MasterListDecode {
                url: url.to_string(),
            })?;

    Ok(list.repositories)
}
