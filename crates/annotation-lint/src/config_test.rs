//! Unit tests for configuration and schema dispatch

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::error::LintError;
    use crate::schema::SchemaKind;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_schema_from_argument() {
        let config = Config::from_args(args(&["pod-ips"]), None).expect("Config should parse");
        assert_eq!(config.schema, SchemaKind::PodIPs);
        assert!(!config.print_json_schema);
    }

    #[test]
    fn test_argument_overrides_environment() {
        let config = Config::from_args(
            args(&["--json-schema", "nic-info"]),
            Some("pod-ips".to_string()),
        )
        .expect("Config should parse");
        assert_eq!(config.schema, SchemaKind::NicInfo);
        assert!(config.print_json_schema);
    }

    #[test]
    fn test_schema_from_environment() {
        let config = Config::from_args(args(&[]), Some("v1alpha1/node-network".to_string()))
            .expect("Config should parse");
        assert_eq!(config.schema, SchemaKind::NodeNetworkV1Alpha1);
    }

    #[test]
    fn test_missing_schema() {
        let err = Config::from_args(args(&[]), None).expect_err("Schema is required");
        assert!(matches!(err, LintError::InvalidConfig(_)), "Got {err:?}");
    }

    #[test]
    fn test_unknown_schema_and_flags() {
        let err = Config::from_args(args(&["pod-ip"]), None).expect_err("Unknown schema");
        assert!(matches!(err, LintError::UnknownSchema(_)), "Got {err:?}");
        assert!(err.to_string().contains("interface-status"), "Should list known schemas: {err}");

        let err = Config::from_args(args(&["--verbose", "pod-ips"]), None).expect_err("Unknown flag");
        assert!(matches!(err, LintError::InvalidConfig(_)), "Got {err:?}");

        let err = Config::from_args(args(&["pod-ips", "nic-info"]), None).expect_err("Extra argument");
        assert!(matches!(err, LintError::InvalidConfig(_)), "Got {err:?}");
    }

    #[test]
    fn test_every_name_parses() {
        for name in SchemaKind::NAMES {
            let kind: SchemaKind = name.parse().unwrap_or_else(|e| panic!("{name}: {e}"));
            assert!(kind.annotation_key().starts_with("networking.gke.io/"));
        }
    }

    #[test]
    fn test_canonicalize_reorders_keys() {
        let canonical = SchemaKind::PodIPs
            .canonicalize(r#"[ {"ip": "10.0.0.1", "networkName": "a"} ]"#)
            .expect("Payload should be valid");
        assert_eq!(canonical, r#"[{"networkName":"a","ip":"10.0.0.1"}]"#);

        let canonical = SchemaKind::InterfaceStatus.canonicalize("null").expect("null is valid");
        assert_eq!(canonical, "null");
    }

    #[test]
    fn test_canonicalize_normalizes_null_lists_inside_records() {
        let payload = r#"[{"name":"a","cidrs":null,"scope":"global"}]"#;
        let canonical = SchemaKind::MultiNetwork
            .canonicalize(payload)
            .expect("null cidrs should be accepted");
        assert_eq!(canonical, r#"[{"name":"a","cidrs":[],"scope":"global"}]"#);
        assert_ne!(canonical, payload, "Normalized payload is reported as non-canonical");

        let canonical = SchemaKind::InterfaceStatus
            .canonicalize(r#"[{"networkName":"n","ipAddresses":null,"macAddress":"aa","dnsConfig":{"nameservers":null,"searches":null}}]"#)
            .expect("null lists should be accepted");
        assert_eq!(
            canonical,
            r#"[{"networkName":"n","ipAddresses":[],"macAddress":"aa","dnsConfig":{"nameservers":[],"searches":[]}}]"#
        );

        let canonical = SchemaKind::MultiNetwork.canonicalize("null").expect("null is valid");
        assert_eq!(canonical, "null", "Top-level nil list is not normalized");
    }

    #[test]
    fn test_canonicalize_rejects_invalid_payload() {
        let err = SchemaKind::NicInfo
            .canonicalize(r#"[{"birthIP":"10.0.0.1"}]"#)
            .expect_err("Payload is missing keys");
        assert!(
            matches!(&err, LintError::Annotation(e) if e.is_decode()),
            "Got {err:?}"
        );
    }

    #[test]
    fn test_json_schema_names_wire_keys() {
        let schema = SchemaKind::InterfaceStatus.json_schema().expect("Schema should render");
        for key in ["networkName", "ipAddresses", "macAddress", "dnsConfig", "dhcpServerIP"] {
            assert!(schema.contains(key), "Schema should mention {key}");
        }

        let schema = SchemaKind::NodeNetwork.json_schema().expect("Schema should render");
        assert!(schema.contains("ipv4-subnet"));
    }
}
