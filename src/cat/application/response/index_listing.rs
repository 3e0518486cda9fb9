use serde::Deserialize;

/// One row of a cat index listing: the index name and its status label.
///
/// Exists only while a response is being projected; callers receive
/// plain names or status strings, never this row.
#[derive(Debug, Deserialize)]
pub(crate) struct IndexListingRow {
    pub(crate) index: String,
    pub(crate) status: String,
}
