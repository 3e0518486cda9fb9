//! The cat API operations: node inventory and index status queries.

use crate::cat::application::{
    request::cat_request::CatRequest, response::index_listing::IndexListingRow,
};
use crate::core::domain::{
    error::CatResult,
    model::{NodeStatus, StatusFilter},
};
use crate::core::infrastructure::transport::{CatTransport, RequestOptions};
use serde::de::DeserializeOwned;
use std::collections::HashSet;

/// Column projection requested for every node listing.
const NODE_COLUMNS: [&str; 8] = [
    "id",
    "name",
    "host",
    "ip",
    "fileDescriptorMax",
    "diskUsed",
    "diskTotal",
    "diskUsedPercent",
];

/// Stateless pipeline over the cat API.
///
/// Every operation is strictly linear: build the request, execute it
/// through the given transport, decode the JSON array, project the
/// typed result. Nothing is retained between calls, so a single value
/// can serve any number of concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatService;

impl CatService {
    pub fn new() -> Self {
        Self
    }

    /// Lists every node in the cluster with the fixed column projection.
    ///
    /// `full_id=true` is always requested so the cluster never truncates
    /// node identifiers. Rows come back in whatever order the cluster
    /// chose; no resort is applied.
    ///
    /// # Errors
    /// Returns `CatError::Transport` if the request fails and
    /// `CatError::Decode` if the body does not parse into node rows; no
    /// partial result is synthesized.
    pub async fn nodes<T>(
        &self,
        transport: &T,
        options: &RequestOptions,
    ) -> CatResult<Vec<NodeStatus>>
    where
        T: CatTransport + ?Sized,
    {
        let request = CatRequest::get("nodes", options)
            .param("full_id", "true")
            .columns(&NODE_COLUMNS);
        let body = transport.execute(&request).await?;
        decode(&body)
    }

    /// Returns the names of all indices matching the given patterns
    /// whose status passes the filter.
    ///
    /// The patterns are comma-joined into a single request targeting the
    /// union of matches, one round trip regardless of how many are
    /// given. Wildcards expand across every visibility state (open,
    /// closed, hidden) so status filtering is complete. An EMPTY filter
    /// accepts every status, not none.
    ///
    /// The result is an unordered, deduplicated set of index names.
    ///
    /// # Errors
    /// Returns `CatError::Transport` if the request fails and
    /// `CatError::Decode` if the body does not parse into listing rows.
    pub async fn indices<T, I, S>(
        &self,
        transport: &T,
        patterns: I,
        status_filter: &StatusFilter,
        options: &RequestOptions,
    ) -> CatResult<HashSet<String>>
    where
        T: CatTransport + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let target = patterns
            .into_iter()
            .map(|p| p.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(",");
        let request = index_listing_request(&target, options);
        let body = transport.execute(&request).await?;
        let rows: Vec<IndexListingRow> = decode(&body)?;

        Ok(rows
            .into_iter()
            .filter(|row| status_filter.matches(&row.status))
            .map(|row| row.index)
            .collect())
    }

    /// Looks up the status label of a single index by exact name.
    ///
    /// Returns `None` when no row matches the name exactly: the index
    /// may not exist or may have been deleted concurrently with the
    /// query; the caller decides what absence means. If several rows
    /// match, the first one in response order wins.
    ///
    /// # Errors
    /// Returns `CatError::Transport` if the request fails and
    /// `CatError::Decode` if the body does not parse into listing rows.
    pub async fn index_state<T>(
        &self,
        transport: &T,
        options: &RequestOptions,
        index_name: &str,
    ) -> CatResult<Option<String>>
    where
        T: CatTransport + ?Sized,
    {
        let request = index_listing_request(index_name, options);
        let body = transport.execute(&request).await?;
        let rows: Vec<IndexListingRow> = decode(&body)?;

        Ok(rows
            .into_iter()
            .find(|row| row.index == index_name)
            .map(|row| row.status))
    }
}

/// Builds the shared index listing request: name and status columns
/// only, wildcards expanded across every visibility state, server-side
/// sort as a stability hint.
fn index_listing_request(target: &str, options: &RequestOptions) -> CatRequest {
    CatRequest::get(&format!("indices/{}", target), options)
        .param("expand_wildcards", "all")
        .columns(&["index", "status"])
        .param("s", "index,status")
}

/// Decodes a response body into the requested shape.
///
/// Pure structural decoding: a malformed body or a shape mismatch is a
/// hard failure, propagated as `CatError::Decode`.
fn decode<R>(body: &[u8]) -> CatResult<R>
where
    R: DeserializeOwned,
{
    Ok(serde_json::from_slice(body)?)
}
