//! Unit tests for the shared annotation codec

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::v1::{PodIP, PodIPsAnnotation};

    #[test]
    fn test_nil_and_empty_are_distinct() {
        let nil = PodIPsAnnotation::nil();
        let empty = PodIPsAnnotation::empty();

        assert_eq!(nil.marshal().expect("Failed to marshal nil"), "null");
        assert_eq!(empty.marshal().expect("Failed to marshal empty"), "[]");
        assert_ne!(nil, empty, "nil and empty lists must not compare equal");

        assert!(PodIPsAnnotation::parse("null").expect("Failed to parse null").is_nil());
        let parsed = PodIPsAnnotation::parse("[]").expect("Failed to parse []");
        assert!(!parsed.is_nil(), "[] must not parse as nil");
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_default_is_nil() {
        assert!(PodIPsAnnotation::default().is_nil());
    }

    #[test]
    fn test_push_turns_nil_into_populated() {
        let mut list = PodIPsAnnotation::nil();
        list.push(PodIP::new("a", "10.0.0.1"));
        list.push(PodIP::new("b", "10.0.0.2"));
        assert_eq!(list.len(), 2);
        let names: Vec<_> = list.iter().map(|p| p.network_name.as_str()).collect();
        assert_eq!(names, ["a", "b"], "Order must be preserved");
    }

    #[test]
    fn test_conversions() {
        let from_none: PodIPsAnnotation = None.into();
        assert!(from_none.is_nil());

        let collected: PodIPsAnnotation = std::iter::empty().collect();
        assert!(!collected.is_nil(), "Collecting yields a non-nil list");

        let list = PodIPsAnnotation::from(vec![PodIP::new("a", "10.0.0.1")]);
        assert_eq!(list.clone().into_inner(), Some(vec![PodIP::new("a", "10.0.0.1")]));
        assert_eq!(list.into_iter().count(), 1);
        assert_eq!(PodIPsAnnotation::nil().into_iter().count(), 0);
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        let inputs = [
            "",
            "[",
            r#"[{"networkName":"a","ip":"10.0.0.1"}"#,
            "{}",
            r#""string""#,
            "42",
            "[1]",
            "[null]",
            "null null",
            r#"[{"networkName":"a","ip":"10.0.0.1"}] trailing"#,
        ];

        for input in inputs {
            let err = parse_annotation::<PodIP>(input)
                .expect_err(&format!("Parsing {input:?} should fail"));
            assert!(err.is_decode(), "Expected decode error for {input:?}, got {err:?}");
            assert!(!err.is_encode());
            assert_eq!(err.input(), Some(input), "Error should carry the offending input");
        }
    }

    #[test]
    fn test_decode_error_message_names_schema() {
        let err = parse_annotation::<PodIP>("{}").expect_err("Object should fail");
        let message = err.to_string();
        assert!(message.contains("PodIPs"), "Message should name schema: {message}");
        assert!(message.contains("\"{}\""), "Message should quote input: {message}");
    }

    #[test]
    fn test_decode_error_message_truncates_long_input() {
        let input = format!("[{}", "x".repeat(1000));
        let err = parse_annotation::<PodIP>(&input).expect_err("Garbage should fail");
        let message = err.to_string();
        assert!(message.len() < 600, "Message should be truncated: {} chars", message.len());
        assert!(message.contains("..."));
        assert_eq!(err.input(), Some(input.as_str()), "Full input is still available");
    }

    #[test]
    fn test_whitespace_is_accepted() {
        let parsed = parse_annotation::<PodIP>(" [ {\"networkName\": \"a\", \"ip\": \"10.0.0.1\"} ]\n")
            .expect("Whitespace should be accepted");
        assert_eq!(parsed, PodIPsAnnotation::from(vec![PodIP::new("a", "10.0.0.1")]));
    }

    #[test]
    fn test_escaped_strings_round_trip() {
        let input = PodIPsAnnotation::from(vec![PodIP::new("net \"quoted\" \\ é", "10.0.0.1")]);
        let marshalled = marshal_annotation(&input).expect("Failed to marshal");
        let parsed = parse_annotation::<PodIP>(&marshalled).expect("Failed to parse");
        assert_eq!(parsed, input);
    }
}
