//! Hub identity record

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Derived identity of a hub repository.
///
/// A plain value: every field is computed once from the builder inputs
/// and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubConfig {
    /// Prefixed hub name, e.g. `cn-myproj`
    pub hub_name: String,
    /// Repository slug `<owner>/<hub_name>`
    pub hub_repo: String,
    /// Browsable repository URL
    pub hub_url: String,
    /// Local working directory `<workspace_root>/<hub_name>`
    pub hub_dir: PathBuf,
}

impl HubConfig {
    pub fn hub_name(&self) -> &str {
        &self.hub_name
    }

    pub fn hub_repo(&self) -> &str {
        &self.hub_repo
    }

    pub fn hub_url(&self) -> &str {
        &self.hub_url
    }

    pub fn hub_dir(&self) -> &Path {
        &self.hub_dir
    }
}

impl fmt::Display for HubConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.hub_repo, self.hub_dir.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HubConfig {
        HubConfig {
            hub_name: "cn-myproj".to_string(),
            hub_repo: "alice/cn-myproj".to_string(),
            hub_url: "https://github.com/alice/cn-myproj".to_string(),
            hub_dir: PathBuf::from("/home/alice/work/cn-myproj"),
        }
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["hubName"], "cn-myproj");
        assert_eq!(value["hubRepo"], "alice/cn-myproj");
        assert_eq!(value["hubUrl"], "https://github.com/alice/cn-myproj");
        assert_eq!(value["hubDir"], "/home/alice/work/cn-myproj");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            format!("alice/cn-myproj -> {}", Path::new("/home/alice/work/cn-myproj").display())
        );
    }
}
