//! Validation for the `[zosmf]` and `[search]` sections.

use crate::schema::ZoweConfig;

use super::helpers::validate_range;

/// Validate connection settings.
pub(crate) fn validate_zosmf(errors: &mut Vec<String>, config: &ZoweConfig) {
    let zosmf = &config.zosmf;
    validate_range(errors, "zosmf.port", zosmf.port, 1, 65535);
    validate_range(
        errors,
        "zosmf.connect_timeout",
        zosmf.connect_timeout,
        1,
        300,
    );
    if zosmf.protocol != "http" && zosmf.protocol != "https" {
        errors.push(format!(
            "zosmf.protocol = {:?} must be \"http\" or \"https\"",
            zosmf.protocol
        ));
    }
}

/// Validate search defaults.
pub(crate) fn validate_search(errors: &mut Vec<String>, config: &ZoweConfig) {
    validate_range(
        errors,
        "search.max_concurrent_requests",
        config.search.max_concurrent_requests,
        0,
        100,
    );
    validate_range(
        errors,
        "search.timeout_secs",
        config.search.timeout_secs,
        0,
        86400,
    );
    if let Some(encoding) = &config.search.encoding {
        if encoding.trim().is_empty() {
            errors.push("search.encoding must not be blank".into());
        }
    }
}
