//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Zowe CLI configuration
# Only override what you want to change -- missing fields use defaults.
# The password is read from ZOWE_OPT_PASSWORD and never stored here.

[zosmf]
# protocol = "https"         # http or https
# host = "mainframe.example.com"
# port = 443                 # 1-65535
# base_path = ""
# user = ""
# reject_unauthorized = true
# connect_timeout = 10       # seconds, 1-300

[search]
# max_concurrent_requests = 1  # 0-100, 0 = unbounded
# timeout_secs = 0             # 0-86400, 0 = no timeout
# mainframe_search = false
# case_sensitive = false
# encoding = "IBM-1047"

[logging]
# level = "INFO"             # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
