//! z/OSMF connection configuration.

use std::fmt;

use crate::ZosFilesError;

/// Connection settings for one z/OSMF instance.
#[derive(Clone)]
pub struct ZosmfConfig {
    pub protocol: String,
    pub host: String,
    pub port: u16,
    pub base_path: String,
    pub user: String,
    pub password: String,
    pub reject_unauthorized: bool,
    pub connect_timeout_secs: u64,
}

impl fmt::Debug for ZosmfConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZosmfConfig")
            .field("protocol", &self.protocol)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("base_path", &self.base_path)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("reject_unauthorized", &self.reject_unauthorized)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl ZosmfConfig {
    pub fn new(host: impl Into<String>, user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            protocol: "https".to_string(),
            host: host.into(),
            port: 443,
            base_path: String::new(),
            user: user.into(),
            password: password.into(),
            reject_unauthorized: true,
            connect_timeout_secs: 10,
        }
    }

    /// Create config from the standard Zowe environment variables.
    ///
    /// Reads `ZOWE_OPT_HOST`, `ZOWE_OPT_USER` and `ZOWE_OPT_PASSWORD`
    /// (all required) and `ZOWE_OPT_PORT` (optional). Empty values count
    /// as unset. Unlike the CLI there is no config file to fall back on.
    pub fn from_env() -> Result<Self, ZosFilesError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ZosFilesError> {
        let var = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ZosFilesError::InvalidInput(format!("{name} is not set")))
        };

        let mut config = Self::new(
            var("ZOWE_OPT_HOST")?,
            var("ZOWE_OPT_USER")?,
            var("ZOWE_OPT_PASSWORD")?,
        );

        if let Ok(port) = var("ZOWE_OPT_PORT") {
            config.port = port.parse().map_err(|_| {
                ZosFilesError::InvalidInput(format!("ZOWE_OPT_PORT is not a port: {port}"))
            })?;
        }

        Ok(config)
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_reject_unauthorized(mut self, reject: bool) -> Self {
        self.reject_unauthorized = reject;
        self
    }

    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    /// `protocol://host:port[/base_path]` with no trailing slash.
    pub fn base_url(&self) -> String {
        let base_path = self.base_path.trim_matches('/');
        if base_path.is_empty() {
            format!("{}://{}:{}", self.protocol, self.host, self.port)
        } else {
            format!("{}://{}:{}/{}", self.protocol, self.host, self.port, base_path)
        }
    }
}
