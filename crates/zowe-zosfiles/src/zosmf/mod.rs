//! z/OSMF REST files client.
//!
//! Implements `ZosFilesApi` over the z/OSMF data set REST services
//! (`/zosmf/restfiles/ds`), using basic authentication.

mod api;
mod client;
mod config;

pub use client::ZosmfClient;
pub use config::ZosmfConfig;
