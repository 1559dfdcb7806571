//! `zowe files search data-sets`.

use std::sync::Arc;

use tracing::{debug, info};
use zowe_config::SearchDefaults;
use zowe_zosfiles::{
    GetOptions, ListOptions, ProgressSink, ProgressUpdate, Search, SearchOptions, SearchResponse,
    TaskStage, ZosmfClient, ZosmfConfig,
};

use crate::cli::SearchDataSetsArgs;

/// Forwards search progress to the log.
struct LogProgress;

impl ProgressSink for LogProgress {
    fn update(&self, update: ProgressUpdate) {
        match update.stage {
            TaskStage::InProgress => debug!(
                percent = update.percent_complete,
                "{}", update.status_message
            ),
            TaskStage::Complete | TaskStage::Failed => info!(
                stage = ?update.stage,
                "{}", update.status_message
            ),
        }
    }
}

/// Flags win over the `[search]` section of the config file.
pub fn search_options(args: &SearchDataSetsArgs, defaults: &SearchDefaults) -> SearchOptions {
    let max_concurrent = args
        .max_concurrent_requests
        .unwrap_or(defaults.max_concurrent_requests as usize);
    let timeout = args.timeout.unwrap_or(u64::from(defaults.timeout_secs));

    SearchOptions::new(args.pattern.as_str(), args.search_string.as_str())
        .with_case_sensitive(args.case_sensitive || defaults.case_sensitive)
        .with_mainframe_search(args.mainframe_search || defaults.mainframe_search)
        .with_max_concurrent_requests(max_concurrent)
        .with_timeout_secs(timeout)
        .with_list_options(ListOptions {
            volume: args.volume.clone(),
            ..ListOptions::default()
        })
        .with_get_options(GetOptions {
            volume: args.volume.clone(),
            encoding: args.encoding.clone().or_else(|| defaults.encoding.clone()),
            ..GetOptions::default()
        })
}

pub async fn run(
    args: &SearchDataSetsArgs,
    defaults: &SearchDefaults,
    connection: ZosmfConfig,
) -> zowe_common::Result<SearchResponse> {
    let client = ZosmfClient::new(connection)?;
    let search = Search::new(Arc::new(client));
    let options = search_options(args, defaults).with_progress(Arc::new(LogProgress));
    Ok(search.search(&options).await?)
}
