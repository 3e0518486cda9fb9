//! Domain model for node rows from the `/_cat/nodes` endpoint.

use serde::{Deserialize, Serialize};

/// A node as reported by the cat nodes endpoint.
///
/// Values are kept exactly as the cluster reports them: the cat API in
/// JSON mode emits every column as a string, so no numeric parsing is
/// applied. `id` and `name` are always present; the remaining columns
/// may be omitted or null for some node roles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NodeStatus {
    /// Full (untruncated) node identifier.
    pub id: String,
    /// Human-readable node name.
    pub name: String,
    /// Hostname the node reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// IP address the node reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Maximum number of file descriptors available to the node process.
    #[serde(
        rename = "fileDescriptorMax",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub file_descriptor_max: Option<String>,
    /// Disk space in use on the node's data path (e.g. "27.4gb").
    #[serde(rename = "diskUsed", default, skip_serializing_if = "Option::is_none")]
    pub disk_used: Option<String>,
    /// Total disk space on the node's data path.
    #[serde(rename = "diskTotal", default, skip_serializing_if = "Option::is_none")]
    pub disk_total: Option<String>,
    /// Used disk as a percentage of the total.
    #[serde(
        rename = "diskUsedPercent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub disk_used_percent: Option<String>,
}
