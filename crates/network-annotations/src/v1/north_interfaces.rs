//! NorthInterfaces annotation
//!
//! Maps logical networks to the IP address of their north interface.

use crate::codec::{AnnotationList, AnnotationRecord, parse_annotation};
use crate::error::AnnotationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::NORTH_INTERFACES_ANNOTATION_KEY;

/// North interface of a logical network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NorthInterface {
    /// Logical network name
    pub network: String,

    /// IP address of the interface
    pub ip_address: String,
}

impl NorthInterface {
    /// Create a north interface mapping
    pub fn new(network: impl Into<String>, ip_address: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            ip_address: ip_address.into(),
        }
    }
}

impl AnnotationRecord for NorthInterface {
    const SCHEMA_NAME: &'static str = "NorthInterfaces";
    const ANNOTATION_KEY: &'static str = NORTH_INTERFACES_ANNOTATION_KEY;
}

/// List of north interfaces stored under [`NORTH_INTERFACES_ANNOTATION_KEY`]
pub type NorthInterfacesAnnotation = AnnotationList<NorthInterface>;

/// Parse a NorthInterfaces annotation value
pub fn parse_north_interfaces_annotation(
    text: &str,
) -> Result<NorthInterfacesAnnotation, AnnotationError> {
    parse_annotation(text)
}
