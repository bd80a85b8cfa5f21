//! Multi-network annotation codecs
//!
//! Kubernetes object metadata only stores string values, so structured
//! networking facts (pod IPs, node networks, attachment requests, north
//! interfaces, NIC provenance and interface status) are each serialized into
//! a single annotation value.
//!
//! Every schema is a list of records wrapped in an [`AnnotationList`], which
//! keeps the nil list (`null`) distinct from the empty list (`[]`).
//!
//! # Example
//!
//! ```
//! use network_annotations::v1::{PodIP, PodIPsAnnotation, parse_pod_ips_annotation};
//! use network_annotations::marshal_annotation;
//!
//! # fn example() -> Result<(), network_annotations::AnnotationError> {
//! let ips = PodIPsAnnotation::from(vec![PodIP::new("network-a", "198.51.100.0")]);
//! let text = marshal_annotation(&ips)?;
//! assert_eq!(text, r#"[{"networkName":"network-a","ip":"198.51.100.0"}]"#);
//! assert_eq!(parse_pod_ips_annotation(&text)?, ips);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod codec;
pub mod error;
pub mod metadata;
pub mod v1;
pub mod v1alpha1;

#[cfg(test)]
mod codec_test;

pub use codec::{AnnotationList, AnnotationRecord, marshal_annotation, parse_annotation};
pub use error::AnnotationError;
pub use metadata::*;
