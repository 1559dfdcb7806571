//! Build the list of candidates from the data set pattern.

use tracing::{debug, warn};

use crate::{DataSetOrganization, ZosFilesApi};

use super::options::SearchOptions;
use super::types::{PassOutcome, SearchItem};
use super::SearchError;

/// List every sequential data set and PDS member matching the pattern.
///
/// Failing to list the pattern itself is fatal. Failing to list one PDS
/// only records that PDS as a failure.
pub(crate) async fn collect_candidates(
    api: &dyn ZosFilesApi,
    options: &SearchOptions,
) -> Result<PassOutcome, SearchError> {
    let entries = api
        .list_data_sets(&options.pattern, &options.list_options)
        .await
        .map_err(SearchError::ListFailed)?;

    let mut outcome = PassOutcome::default();
    let mut partitioned = Vec::new();

    for entry in entries {
        if entry.is_migrated() {
            debug!(dsn = %entry.dsname, "skipping migrated data set");
            continue;
        }
        match entry.organization() {
            Some(DataSetOrganization::Sequential) => {
                outcome.items.push(SearchItem::data_set(entry.dsname));
            }
            Some(DataSetOrganization::Partitioned) => partitioned.push(entry.dsname),
            Some(DataSetOrganization::Other) | None => {}
        }
    }

    for dsn in partitioned {
        match api.list_members(&dsn, &options.list_options).await {
            Ok(members) => {
                outcome.items.extend(
                    members
                        .into_iter()
                        .filter_map(|m| m.member)
                        .map(|member| SearchItem::member(dsn.as_str(), member)),
                );
            }
            Err(e) => {
                warn!(%dsn, error = %e, "failed to list members");
                outcome.failures.push(dsn);
            }
        }
    }

    Ok(outcome)
}
