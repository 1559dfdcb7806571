use std::fmt;

use serde::Serialize;

/// One occurrence of the search string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchLocation {
    /// Zero-based line number.
    pub line: usize,
    /// Zero-based column (in characters) where the match starts.
    pub column: usize,
    /// The full text of the line.
    pub contents: String,
}

/// A data set, or one member of a PDS, to be searched.
///
/// Equality only considers the data set and member names.
#[derive(Debug, Clone, Serialize)]
pub struct SearchItem {
    pub dsn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub match_list: Vec<MatchLocation>,
}

impl SearchItem {
    pub fn data_set(dsn: impl Into<String>) -> Self {
        Self {
            dsn: dsn.into(),
            member: None,
            match_list: Vec::new(),
        }
    }

    pub fn member(dsn: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            dsn: dsn.into(),
            member: Some(member.into()),
            match_list: Vec::new(),
        }
    }

    /// `DSN` or `DSN(MEMBER)`, the form z/OSMF addresses content by.
    pub fn target(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for SearchItem {
    fn eq(&self, other: &Self) -> bool {
        self.dsn == other.dsn && self.member == other.member
    }
}

impl Eq for SearchItem {}

impl fmt::Display for SearchItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.member {
            Some(member) => write!(f, "{}({})", self.dsn, member),
            None => f.write_str(&self.dsn),
        }
    }
}

/// Final result of a search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    /// True when at least one data set or member could not be searched.
    pub success: bool,
    /// Human-readable report of every match.
    pub command_response: String,
    /// Matched items, sorted by data set then member name.
    pub matches: Vec<SearchItem>,
    /// Present when anything failed; lists each failed target.
    pub error_message: Option<String>,
    /// Identifiers of every target that could not be searched.
    pub failures: Vec<String>,
    /// Whether the deadline fired before the search finished.
    pub timed_out: bool,
}

/// What one pass produced.
#[derive(Debug, Default)]
pub(crate) struct PassOutcome {
    pub items: Vec<SearchItem>,
    pub failures: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_formats_member() {
        assert_eq!(SearchItem::data_set("A.SEQ").target(), "A.SEQ");
        assert_eq!(SearchItem::member("A.PDS", "MEM1").target(), "A.PDS(MEM1)");
    }

    #[test]
    fn equality_ignores_matches() {
        let mut matched = SearchItem::member("A.PDS", "MEM1");
        matched.match_list.push(MatchLocation {
            line: 0,
            column: 0,
            contents: "x".into(),
        });
        assert_eq!(matched, SearchItem::member("A.PDS", "MEM1"));
        assert_ne!(matched, SearchItem::member("A.PDS", "MEM2"));
        assert_ne!(SearchItem::data_set("A.PDS"), SearchItem::member("A.PDS", "MEM1"));
    }
}
