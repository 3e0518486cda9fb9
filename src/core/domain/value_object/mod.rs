mod cluster_host;
mod cluster_port;
mod cluster_url;

pub use cluster_host::ClusterHost;
pub use cluster_port::ClusterPort;
pub use cluster_url::ClusterUrl;
