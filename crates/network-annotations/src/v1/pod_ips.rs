//! PodIPs annotation
//!
//! Records the IP address a pod received on each network it is attached to.

use crate::codec::{AnnotationList, AnnotationRecord, parse_annotation};
use crate::error::AnnotationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::POD_IPS_ANNOTATION_KEY;

/// IP address of a pod on one network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PodIP {
    /// Network name. Empty for the default network.
    pub network_name: String,

    /// IP address on that network
    pub ip: String,
}

impl PodIP {
    /// Create a pod IP entry for a named network
    pub fn new(network_name: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            network_name: network_name.into(),
            ip: ip.into(),
        }
    }
}

impl AnnotationRecord for PodIP {
    const SCHEMA_NAME: &'static str = "PodIPs";
    const ANNOTATION_KEY: &'static str = POD_IPS_ANNOTATION_KEY;
}

/// List of pod IPs stored under [`POD_IPS_ANNOTATION_KEY`]
pub type PodIPsAnnotation = AnnotationList<PodIP>;

/// Parse a PodIPs annotation value
pub fn parse_pod_ips_annotation(text: &str) -> Result<PodIPsAnnotation, AnnotationError> {
    parse_annotation(text)
}
