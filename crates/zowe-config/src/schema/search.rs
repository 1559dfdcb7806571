use serde::{Deserialize, Serialize};

/// Defaults applied to `zowe files search data-sets` when no flag overrides them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchDefaults {
    /// Simultaneous requests per pass (0 = unbounded).
    pub max_concurrent_requests: u32,
    /// Whole seconds before no new work is started (0 = no timeout).
    pub timeout_secs: u32,
    /// Ask z/OSMF to pre-filter candidates before downloading them.
    pub mainframe_search: bool,
    pub case_sensitive: bool,
    /// Codepage passed to z/OSMF when downloading content.
    pub encoding: Option<String>,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            max_concurrent_requests: 1,
            timeout_secs: 0,
            mainframe_search: false,
            case_sensitive: false,
            encoding: None,
        }
    }
}
