//! z/OSMF connection settings from the config profile and environment.

use zowe_common::ConfigError;
use zowe_config::ZosmfProfile;
use zowe_zosfiles::ZosmfConfig;

/// Build connection settings for `profile`.
///
/// `ZOWE_OPT_HOST`, `ZOWE_OPT_PORT` and `ZOWE_OPT_USER` override the
/// profile. The password is only ever taken from `ZOWE_OPT_PASSWORD`.
pub fn connection_from_env(profile: &ZosmfProfile) -> Result<ZosmfConfig, ConfigError> {
    connection(profile, |name| std::env::var(name).ok())
}

fn connection(
    profile: &ZosmfProfile,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ZosmfConfig, ConfigError> {
    let setting = |name: &str, configured: &str, key: &str| {
        env(name)
            .filter(|v| !v.is_empty())
            .or_else(|| (!configured.is_empty()).then(|| configured.to_string()))
            .ok_or_else(|| ConfigError::MissingSetting(format!("{key} (or {name})")))
    };

    let host = setting("ZOWE_OPT_HOST", &profile.host, "zosmf.host")?;
    let user = setting("ZOWE_OPT_USER", &profile.user, "zosmf.user")?;
    let password = env("ZOWE_OPT_PASSWORD")
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ConfigError::MissingSetting("ZOWE_OPT_PASSWORD".into()))?;

    let port = match env("ZOWE_OPT_PORT") {
        Some(port) => port.parse::<u16>().map_err(|_| {
            ConfigError::ValidationError(format!("ZOWE_OPT_PORT is not a port: {port}"))
        })?,
        None => u16::try_from(profile.port).map_err(|_| {
            ConfigError::ValidationError(format!("zosmf.port = {} is out of range", profile.port))
        })?,
    };

    Ok(ZosmfConfig::new(host, user, password)
        .with_port(port)
        .with_protocol(profile.protocol.as_str())
        .with_base_path(profile.base_path.as_str())
        .with_reject_unauthorized(profile.reject_unauthorized)
        .with_connect_timeout(u64::from(profile.connect_timeout)))
}
