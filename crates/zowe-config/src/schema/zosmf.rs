use serde::{Deserialize, Serialize};

/// Connection settings for a z/OSMF instance.
///
/// The password is never read from the file; it comes from the
/// `ZOWE_OPT_PASSWORD` environment variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZosmfProfile {
    pub protocol: String,
    pub host: String,
    pub port: u32,
    /// Prefix placed in front of `/zosmf/...`, e.g. when routed through a gateway.
    pub base_path: String,
    pub user: String,
    pub reject_unauthorized: bool,
    /// Connect timeout in seconds.
    pub connect_timeout: u32,
}

impl Default for ZosmfProfile {
    fn default() -> Self {
        Self {
            protocol: "https".into(),
            host: String::new(),
            port: 443,
            base_path: String::new(),
            user: String::new(),
            reject_unauthorized: true,
            connect_timeout: 10,
        }
    }
}
