//! NodeNetwork annotation (v1alpha1)

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
}

impl NodeNetwork {
    /// Create a membership entry
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl AnnotationRecord for NodeNetwork {
    const SCHEMA_NAME: &'static str = "NodeNetwork/v1alpha1";
    const ANNOTATION_KEY: &'static str = NODE_NETWORK_ANNOTATION_KEY;
}

/// List of node networks stored under [`NODE_NETWORK_ANNOTATION_KEY`]
pub type NodeNetworkAnnotation = AnnotationList<NodeNetwork>;

/// Parse a v1alpha1 NodeNetwork annotation value
pub fn parse_node_network_annotation(text: &str) -> Result<NodeNetworkAnnotation, AnnotationError> {
    parse_annotation(text)
}
