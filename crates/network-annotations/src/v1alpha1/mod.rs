//! `networking.gke.io/v1alpha1` annotation schemas
//!
//! Earlier revision of the node network annotation, before per-node subnets
//! were added. Values are not converted between revisions.

pub mod node_network;


pub use node_network::*;

/// Annotation key for the networks a node is attached to
pub const NODE_NETWORK_ANNOTATION_KEY: &str = "networking.gke.io/networks";
