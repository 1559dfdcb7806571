//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod search;
mod zosmf;

pub use logging::*;
pub use search::*;
pub use zosmf::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoweConfig {
    pub zosmf: ZosmfProfile,
    pub search: SearchDefaults,
    pub logging: LoggingConfig,
}
