//! NICInfo annotation
//!
//! Describes where a NIC came from: its identity as assigned at birth,
//! before any renaming happens inside the pod or VM.

use crate::codec::{AnnotationList, AnnotationRecord, parse_annotation};
use crate::error::AnnotationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::NIC_INFO_ANNOTATION_KEY;

/// Birth identity of a NIC
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NicInfo {
    /// IP address assigned at birth
    #[serde(rename = "birthIP")]
    pub birth_ip: String,

    /// PCI bus address (e.g., "0000:00:05.0")
    #[serde(rename = "pciAddress")]
    pub pci_address: String,

    /// Interface name assigned at birth
    #[serde(rename = "birthName")]
    pub birth_name: String,
}

impl NicInfo {
    /// Create a NIC birth record
    pub fn new(
        birth_ip: impl Into<String>,
        pci_address: impl Into<String>,
        birth_name: impl Into<String>,
    ) -> Self {
        Self {
            birth_ip: birth_ip.into(),
            pci_address: pci_address.into(),
            birth_name: birth_name.into(),
        }
    }
}

impl AnnotationRecord for NicInfo {
    const SCHEMA_NAME: &'static str = "NICInfo";
    const ANNOTATION_KEY: &'static str = NIC_INFO_ANNOTATION_KEY;
}

/// List of NIC records stored under [`NIC_INFO_ANNOTATION_KEY`]
pub type NicInfoAnnotation = AnnotationList<NicInfo>;

/// Parse a NICInfo annotation value
pub fn parse_nic_info_annotation(text: &str) -> Result<NicInfoAnnotation, AnnotationError> {
    parse_annotation(text)
}
