//! InterfaceStatus annotation
//!
//! Live runtime status of every interface of a pod or VM: addresses, routes,
//! gateway, DNS and DHCP details. Only the network name, addresses and MAC
//! address are always present; every other field is emitted only when set.

use crate::codec::{AnnotationList, AnnotationRecord, null_as_empty, parse_annotation};
use crate::error::AnnotationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::INTERFACE_STATUS_ANNOTATION_KEY;

/// Runtime status of one interface
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceStatus {
    /// Network the interface is attached to
    pub network_name: String,

    /// IP addresses on the interface, in order
    #[serde(deserialize_with = "null_as_empty")]
    #[schemars(with = "Vec<String>")]
    pub ip_addresses: Vec<String>,

    /// MAC address of the interface
    pub mac_address: String,

    /// Routes installed through the interface.
    /// `Some(vec![])` is kept as `[]` on the wire, distinct from `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<Route>>,

    /// IPv4 default gateway
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway4: Option<String>,

    /// DNS configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_config: Option<DnsConfig>,

    /// IP address of the DHCP server that configured the interface
    #[serde(
        rename = "dhcpServerIP",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub dhcp_server_ip: Option<String>,
}

impl InterfaceStatus {
    /// Create a status record with only the required fields set
    pub fn new(
        network_name: impl Into<String>,
        ip_addresses: impl IntoIterator<Item = impl Into<String>>,
        mac_address: impl Into<String>,
    ) -> Self {
        Self {
            network_name: network_name.into(),
            ip_addresses: ip_addresses.into_iter().map(Into::into).collect(),
            mac_address: mac_address.into(),
            ..Self::default()
        }
    }
}

/// A route through an interface
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Route {
    /// Destination, in CIDR form
    pub to: String,

    /// Gateway for the destination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via: Option<String>,
}

impl Route {
    /// Create a directly connected route
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            via: None,
        }
    }

    /// Route through a gateway
    #[must_use]
    pub fn with_gateway(mut self, gateway: impl Into<String>) -> Self {
        self.via = Some(gateway.into());
        self
    }
}

/// DNS resolver configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DnsConfig {
    /// Nameserver addresses, in order
    #[serde(deserialize_with = "null_as_empty")]
    #[schemars(with = "Vec<String>")]
    pub nameservers: Vec<String>,

    /// Search domains, in order
    #[serde(deserialize_with = "null_as_empty")]
    #[schemars(with = "Vec<String>")]
    pub searches: Vec<String>,
}

impl AnnotationRecord for InterfaceStatus {
    const SCHEMA_NAME: &'static str = "InterfaceStatus";
    const ANNOTATION_KEY: &'static str = INTERFACE_STATUS_ANNOTATION_KEY;
}

/// List of interface statuses stored under [`INTERFACE_STATUS_ANNOTATION_KEY`]
pub type InterfaceStatusAnnotation = AnnotationList<InterfaceStatus>;

/// Parse an InterfaceStatus annotation value
pub fn parse_interface_status_annotation(
    text: &str,
) -> Result<InterfaceStatusAnnotation, AnnotationError> {
    parse_annotation(text)
}
