//! MultiNetwork annotation
//!
//! Requests attachment of an object to additional networks.

use crate::codec::{AnnotationList, AnnotationRecord, null_as_empty, parse_annotation};
use crate::error::AnnotationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::MULTI_NETWORK_ANNOTATION_KEY;

/// A single network attachment request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MultiNetwork {
    /// Network name
    pub name: String,

    /// CIDRs requested on the network, in order
    #[serde(deserialize_with = "null_as_empty")]
    #[schemars(with = "Vec<String>")]
    pub cidrs: Vec<String>,

    /// Allocation scope (e.g., "host-local", "global")
    pub scope: String,
}

impl MultiNetwork {
    /// Create an attachment request
    pub fn new(
        name: impl Into<String>,
        cidrs: impl IntoIterator<Item = impl Into<String>>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cidrs: cidrs.into_iter().map(Into::into).collect(),
            scope: scope.into(),
        }
    }
}

impl AnnotationRecord for MultiNetwork {
    const SCHEMA_NAME: &'static str = "MultiNetwork";
    const ANNOTATION_KEY: &'static str = MULTI_NETWORK_ANNOTATION_KEY;
}

/// List of attachment requests stored under [`MULTI_NETWORK_ANNOTATION_KEY`]
pub type MultiNetworkAnnotation = AnnotationList<MultiNetwork>;

/// Parse a MultiNetwork annotation value
pub fn parse_multi_network_annotation(
    text: &str,
) -> Result<MultiNetworkAnnotation, AnnotationError> {
    parse_annotation(text)
}
