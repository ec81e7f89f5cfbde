//! Hub identity derivation

use std::path::Path;
use tracing::debug;

use crate::models::HubConfig;

/// Prefix every hub repository name carries
pub const HUB_NAME_PREFIX: &str = "cn-";

/// Base of every hub repository URL
pub const HUB_URL_BASE: &str = "https://github.com/";

/// Build the hub identity for `sanitized_name` owned by `owner`.
///
/// Inputs are used verbatim: the name is expected to be sanitized already
/// and nothing is rejected, including empty strings. `hub_dir` is a plain
/// `Path::join`, no normalization of `.` or repeated separators.
pub fn build_hub_config(
    sanitized_name: &str,
    owner: &str,
    workspace_root: impl AsRef<Path>,
) -> HubConfig {
    let hub_name = format!("{}{}", HUB_NAME_PREFIX, sanitized_name);
    let hub_repo = format!("{}/{}", owner, hub_name);
    let hub_url = format!("{}{}", HUB_URL_BASE, hub_repo);
    let hub_dir = workspace_root.as_ref().join(&hub_name);

    debug!(%hub_repo, hub_dir = %hub_dir.display(), "Derived hub config");

    HubConfig {
        hub_name,
        hub_repo,
        hub_url,
        hub_dir,
    }
}
