//! Title keyword search: one find request, JSON to the writer.

use crate::client::ProblemSearch;
use crate::constants;
use crate::error::Error;
use crate::output::{self, RecordMap};
use crate::query::FindQuery;
use std::io::Write;
use tracing::{debug, info};

/// Options for a single search run.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub keyword: String,
    /// Require every whitespace-separated word instead of the whole phrase
    pub all_words: bool,
}

impl SearchRequest {
    #[must_use]
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            all_words: false,
        }
    }

    #[must_use]
    pub fn query(&self) -> FindQuery {
        FindQuery::for_keyword(&self.keyword, self.all_words)
    }
}

/// Runs the search and returns the converted records in service order.
///
/// # Errors
///
/// Returns any error raised by the search backend.
pub async fn search_records<S: ProblemSearch>(
    client: &S,
    request: &SearchRequest,
) -> Result<Vec<RecordMap>, Error> {
    let query = request.query();
    debug!(?query, "searching radar by title");

    let records = client
        .find_problems(&query, &constants::SEARCH_FIELDS)
        .await?;
    info!(count = records.len(), "search returned records");

    Ok(records
        .iter()
        .map(|record| record.to_map(&constants::SEARCH_FIELDS))
        .collect())
}

/// Runs the search and writes the results as JSON to `out`.
///
/// Nothing is written unless the search and rendering both succeed.
///
/// # Errors
///
/// Returns any error from the backend, serialization or the writer.
pub async fn run_search<S: ProblemSearch, W: Write>(
    client: &S,
    request: &SearchRequest,
    out: &mut W,
) -> Result<usize, Error> {
    let records = search_records(client, request).await?;
    output::write_records(out, &records)?;
    Ok(records.len())
}
