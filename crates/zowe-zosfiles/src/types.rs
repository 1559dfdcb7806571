//! z/OSMF data set list entries and request options.

use serde::{Deserialize, Serialize};

/// How a data set is organized, as far as searching is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSetOrganization {
    /// `PS`
    Sequential,
    /// `PO` or `PO-E`
    Partitioned,
    /// VSAM, direct access, or anything else that cannot be read as text.
    Other,
}

/// A single data set in a z/OSMF list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSetEntry {
    pub dsname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dsorg: Option<String>,
    /// `YES` when the data set has been migrated by HSM.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vol: Option<String>,
}

impl DataSetEntry {
    pub fn new(dsname: impl Into<String>, dsorg: impl Into<String>) -> Self {
        Self {
            dsname: dsname.into(),
            dsorg: Some(dsorg.into()),
            ..Self::default()
        }
    }

    pub fn migrated(mut self) -> Self {
        self.migr = Some("YES".into());
        self
    }

    /// `None` when z/OSMF reported no organization (e.g. for aliases).
    pub fn organization(&self) -> Option<DataSetOrganization> {
        let org = match self.dsorg.as_deref()? {
            "PS" => DataSetOrganization::Sequential,
            "PO" | "PO-E" => DataSetOrganization::Partitioned,
            _ => DataSetOrganization::Other,
        };
        Some(org)
    }

    pub fn is_migrated(&self) -> bool {
        self.migr
            .as_deref()
            .is_some_and(|m| m.eq_ignore_ascii_case("yes"))
    }
}

/// A PDS member entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberEntry {
    #[serde(default)]
    pub member: Option<String>,
}

impl MemberEntry {
    pub fn new(member: impl Into<String>) -> Self {
        Self {
            member: Some(member.into()),
        }
    }
}

/// Options for list calls.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Restrict the listing to one volume.
    pub volume: Option<String>,
    /// `X-IBM-Max-Items`; `None` asks for every entry.
    pub max_length: Option<u32>,
    /// Seconds z/OSMF may spend on the request.
    pub response_timeout: Option<u32>,
}

/// Options for content downloads.
#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    pub volume: Option<String>,
    pub binary: bool,
    /// Source codepage, e.g. `IBM-1047`.
    pub encoding: Option<String>,
    pub response_timeout: Option<u32>,
    /// Raw query string appended to the request, starting with `?`.
    pub query_params: Option<String>,
}
