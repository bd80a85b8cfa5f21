//! NodeNetwork annotation
//!
//! Lists the networks a node is attached to, with the node's subnets on them.

use crate::codec::{AnnotationList, AnnotationRecord, parse_annotation};
use crate::error::AnnotationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::NODE_NETWORK_ANNOTATION_KEY;

/// Network membership of a node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NodeNetwork {
    /// Network name
    pub name: String,

    /// IPv4 subnet of the node on this network, in CIDR form
    #[serde(
        rename = "ipv4-subnet",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ipv4_subnet: Option<String>,

    /// IPv6 subnet of the node on this network, in CIDR form
    #[serde(
        rename = "ipv6-subnet",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ipv6_subnet: Option<String>,
}

impl NodeNetwork {
    /// Create a membership entry without subnets
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the IPv4 subnet
    #[must_use]
    pub fn with_ipv4_subnet(mut self, subnet: impl Into<String>) -> Self {
        self.ipv4_subnet = Some(subnet.into());
        self
    }

    /// Set the IPv6 subnet
    #[must_use]
    pub fn with_ipv6_subnet(mut self, subnet: impl Into<String>) -> Self {
        self.ipv6_subnet = Some(subnet.into());
        self
    }
}

impl AnnotationRecord for NodeNetwork {
    const SCHEMA_NAME: &'static str = "NodeNetwork";
    const ANNOTATION_KEY: &'static str = NODE_NETWORK_ANNOTATION_KEY;
}

/// List of node networks stored under [`NODE_NETWORK_ANNOTATION_KEY`]
pub type NodeNetworkAnnotation = AnnotationList<NodeNetwork>;

/// Parse a NodeNetwork annotation value
pub fn parse_node_network_annotation(text: &str) -> Result<NodeNetworkAnnotation, AnnotationError> {
    parse_annotation(text)
}
