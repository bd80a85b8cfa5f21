//! Schema selection and dispatch

use crate::error::LintError;
use network_annotations::{AnnotationList, AnnotationRecord, parse_annotation, v1, v1alpha1};
use schemars::{JsonSchema, schema_for};
use std::str::FromStr;
use tracing::debug;

/// Annotation schemas known to the tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// `networking.gke.io/pod-ips`
    PodIPs,
    /// `networking.gke.io/networks`
    NodeNetwork,
    /// `networking.gke.io/multi-network`
    MultiNetwork,
    /// `networking.gke.io/north-interfaces`
    NorthInterfaces,
    /// `networking.gke.io/nic-info`
    NicInfo,
    /// `networking.gke.io/interface-status`
    InterfaceStatus,
    /// `networking.gke.io/networks`, v1alpha1 revision
    NodeNetworkV1Alpha1,
}

impl SchemaKind {
    /// Names accepted on the command line
    pub const NAMES: [&'static str; 7] = [
        "pod-ips",
        "node-network",
        "multi-network",
        "north-interfaces",
        "nic-info",
        "interface-status",
        "v1alpha1/node-network",
    ];

    /// Annotation key the schema is stored under
    pub fn annotation_key(self) -> &'static str {
        match self {
            Self::PodIPs => v1::POD_IPS_ANNOTATION_KEY,
            Self::NodeNetwork => v1::NODE_NETWORK_ANNOTATION_KEY,
            Self::MultiNetwork => v1::MULTI_NETWORK_ANNOTATION_KEY,
            Self::NorthInterfaces => v1::NORTH_INTERFACES_ANNOTATION_KEY,
            Self::NicInfo => v1::NIC_INFO_ANNOTATION_KEY,
            Self::InterfaceStatus => v1::INTERFACE_STATUS_ANNOTATION_KEY,
            Self::NodeNetworkV1Alpha1 => v1alpha1::NODE_NETWORK_ANNOTATION_KEY,
        }
    }

    /// Parse `text` and re-encode it in canonical form
    ///
    /// Canonical form may differ from the input beyond whitespace and key
    /// order: a `null` required list inside a record (`cidrs`, `ipAddresses`,
    /// `nameservers`, `searches`) is normalized to `[]`. The top-level nil
    /// list stays `null`.
    pub fn canonicalize(self, text: &str) -> Result<String, LintError> {
        match self {
            Self::PodIPs => canonicalize::<v1::PodIP>(text),
            Self::NodeNetwork => canonicalize::<v1::NodeNetwork>(text),
            Self::MultiNetwork => canonicalize::<v1::MultiNetwork>(text),
            Self::NorthInterfaces => canonicalize::<v1::NorthInterface>(text),
            Self::NicInfo => canonicalize::<v1::NicInfo>(text),
            Self::InterfaceStatus => canonicalize::<v1::InterfaceStatus>(text),
            Self::NodeNetworkV1Alpha1 => canonicalize::<v1alpha1::NodeNetwork>(text),
        }
    }

    /// JSON Schema of the annotation value, pretty-printed
    pub fn json_schema(self) -> Result<String, LintError> {
        match self {
            Self::PodIPs => json_schema::<v1::PodIP>(),
            Self::NodeNetwork => json_schema::<v1::NodeNetwork>(),
            Self::MultiNetwork => json_schema::<v1::MultiNetwork>(),
            Self::NorthInterfaces => json_schema::<v1::NorthInterface>(),
            Self::NicInfo => json_schema::<v1::NicInfo>(),
            Self::InterfaceStatus => json_schema::<v1::InterfaceStatus>(),
            Self::NodeNetworkV1Alpha1 => json_schema::<v1alpha1::NodeNetwork>(),
        }
    }
}

impl FromStr for SchemaKind {
    type Err = LintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pod-ips" => Ok(Self::PodIPs),
            "node-network" => Ok(Self::NodeNetwork),
            "multi-network" => Ok(Self::MultiNetwork),
            "north-interfaces" => Ok(Self::NorthInterfaces),
            "nic-info" => Ok(Self::NicInfo),
            "interface-status" => Ok(Self::InterfaceStatus),
            "v1alpha1/node-network" => Ok(Self::NodeNetworkV1Alpha1),
            other => Err(LintError::UnknownSchema(other.to_string())),
        }
    }
}

fn canonicalize<T: AnnotationRecord>(text: &str) -> Result<String, LintError> {
    let list = parse_annotation::<T>(text)?;
    debug!(
        schema = T::SCHEMA_NAME,
        nil = list.is_nil(),
        records = list.len(),
        "Parsed annotation"
    );
    Ok(list.marshal()?)
}

fn json_schema<T: AnnotationRecord + JsonSchema>() -> Result<String, LintError> {
    let schema = schema_for!(AnnotationList<T>);
    Ok(serde_json::to_string_pretty(&schema)?)
}
