//! In-memory `ZosFilesApi` for exercising the search engine.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::{DataSetEntry, GetOptions, ListOptions, MemberEntry, ZosFilesApi, ZosFilesError};

#[derive(Default)]
pub(crate) struct MockFilesApi {
    data_sets: Vec<DataSetEntry>,
    members: HashMap<String, Vec<MemberEntry>>,
    contents: HashMap<String, String>,
    /// Targets (or PDS names, for member listing) whose requests fail.
    failing: HashSet<String>,
    list_fails: bool,
    delay: Duration,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    /// `(target, query)` for every content request, in call order.
    requests: Mutex<Vec<(String, Option<String>)>>,
}

impl MockFilesApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sequential(mut self, dsn: &str, content: &str) -> Self {
        self.data_sets.push(DataSetEntry::new(dsn, "PS"));
        self.contents.insert(dsn.to_string(), content.to_string());
        self
    }

    pub fn with_pds(mut self, dsn: &str, members: &[(&str, &str)]) -> Self {
        self.data_sets.push(DataSetEntry::new(dsn, "PO"));
        self.members.insert(
            dsn.to_string(),
            members.iter().map(|(m, _)| MemberEntry::new(*m)).collect(),
        );
        for (member, content) in members {
            self.contents
                .insert(format!("{dsn}({member})"), content.to_string());
        }
        self
    }

    pub fn with_entry(mut self, entry: DataSetEntry) -> Self {
        self.data_sets.push(entry);
        self
    }

    pub fn failing(mut self, target: &str) -> Self {
        self.failing.insert(target.to_string());
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.list_fails = true;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<(String, Option<String>)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_for(&self, target: &str) -> usize {
        self.requests()
            .iter()
            .filter(|(t, _)| t == target)
            .count()
    }

    /// Emulate z/OSMF's `search=` filter: the body comes back only on a hit.
    fn filter(content: &str, query: &str) -> bool {
        let params: HashMap<&str, &str> = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .collect();
        let needle = urlencoding::decode(params.get("search").copied().unwrap_or(""))
            .unwrap()
            .into_owned();
        if params.get("insensitive") == Some(&"false") {
            content.contains(&needle)
        } else {
            content.to_lowercase().contains(&needle.to_lowercase())
        }
    }
}

#[async_trait]
impl ZosFilesApi for MockFilesApi {
    async fn list_data_sets(
        &self,
        _pattern: &str,
        _options: &ListOptions,
    ) -> Result<Vec<DataSetEntry>, ZosFilesError> {
        if self.list_fails {
            return Err(ZosFilesError::Http {
                status: 500,
                message: "catalog unavailable".into(),
            });
        }
        Ok(self.data_sets.clone())
    }

    async fn list_members(
        &self,
        dsn: &str,
        _options: &ListOptions,
    ) -> Result<Vec<MemberEntry>, ZosFilesError> {
        if self.failing.contains(dsn) {
            return Err(ZosFilesError::Http {
                status: 403,
                message: format!("not authorized to {dsn}"),
            });
        }
        Ok(self.members.get(dsn).cloned().unwrap_or_default())
    }

    async fn get_content(
        &self,
        target: &str,
        options: &GetOptions,
    ) -> Result<Vec<u8>, ZosFilesError> {
        self.requests
            .lock()
            .unwrap()
            .push((target.to_string(), options.query_params.clone()));

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.contains(target) {
            return Err(ZosFilesError::Network(format!("{target}: connection reset")));
        }
        let content = self.contents.get(target).cloned().unwrap_or_default();
        match &options.query_params {
            Some(query) if !Self::filter(&content, query) => Ok(Vec::new()),
            Some(_) => Ok(b"first matching record".to_vec()),
            None => Ok(content.into_bytes()),
        }
    }
}
