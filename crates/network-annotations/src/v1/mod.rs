//! `networking.gke.io/v1` annotation schemas

pub mod interface_status;
pub mod multi_network;
pub mod nic_info;
pub mod node_network;
pub mod north_interfaces;
pub mod pod_ips;


pub use interface_status::*;
pub use multi_network::*;
pub use nic_info::*;
pub use node_network::*;
pub use north_interfaces::*;
pub use pod_ips::*;

/// Annotation key for the IPs a pod holds on each of its networks
pub const POD_IPS_ANNOTATION_KEY: &str = "networking.gke.io/pod-ips";

/// Annotation key for the networks a node is attached to
pub const NODE_NETWORK_ANNOTATION_KEY: &str = "networking.gke.io/networks";

/// Annotation key for multi-network attachment requests
pub const MULTI_NETWORK_ANNOTATION_KEY: &str = "networking.gke.io/multi-network";

/// Annotation key for north interface mappings
pub const NORTH_INTERFACES_ANNOTATION_KEY: &str = "networking.gke.io/north-interfaces";

/// Annotation key for NIC birth records
pub const NIC_INFO_ANNOTATION_KEY: &str = "networking.gke.io/nic-info";

/// Annotation key for interface runtime status
pub const INTERFACE_STATUS_ANNOTATION_KEY: &str = "networking.gke.io/interface-status";
