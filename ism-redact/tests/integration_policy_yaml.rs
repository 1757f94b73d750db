//! Loading a policy from the pipeline's YAML configuration file.

#![cfg(feature = "yaml")]

use ism_redact::{Marking, Policy, PolicyError};

const CONFIG: &str = r#"
input:
  path: /data/mapped
output:
  path: /data/redacted
restrictions:
  forbidden_sci: [HCS, SI-G]
  forbidden_controls:
    - ORCON
    - IMCON
  forbidden_terms: [NOCONTRACT]
  classifications:
    U: 0
    C: 1
    S: 2
    TS: 3
  special_groups: [FVEY]
"#;

mod loading {
    use super::*;

    #[test]
    fn reads_the_restrictions_block() {
        let policy = Policy::from_yaml_str(CONFIG).unwrap();

        let expected = Policy::new()
            .with_forbidden_sci(["HCS", "SI-G"])
            .with_forbidden_controls(["ORCON", "IMCON"])
            .with_forbidden_terms(["NOCONTRACT"])
            .with_classifications(["U", "C", "S", "TS"])
            .with_special_groups(["FVEY"]);
        assert_eq!(policy, expected);
        assert_eq!(policy.ordinal("S"), 2);
    }

    #[test]
    fn reader_and_string_agree() {
        let from_reader = Policy::from_yaml_reader(CONFIG.as_bytes()).unwrap();
        assert_eq!(from_reader, Policy::from_yaml_str(CONFIG).unwrap());
    }

    #[test]
    fn omitted_fields_default_to_empty() {
        let policy = Policy::from_yaml_str("restrictions:\n  forbidden_terms: [NOCONTRACT]\n").unwrap();
        assert!(policy.forbidden_sci().is_empty());
        assert!(policy.special_groups().is_empty());
        assert_eq!(policy.ordinal("S"), 0);
        assert!(policy.is_forbidden(&Marking::new("U").with_banner("U//NOCONTRACT")));
    }

    #[test]
    fn empty_restrictions_still_forbid_top_classification() {
        let policy = Policy::from_yaml_str("restrictions: {}\n").unwrap();
        assert_eq!(policy, Policy::new());
        assert!(policy.is_forbidden(&Marking::new("TS")));
    }
}

mod errors {
    use super::*;

    #[test]
    fn missing_restrictions_block_is_an_error() {
        let err = Policy::from_yaml_str("input:\n  path: /data\n").unwrap_err();
        let PolicyError::Parse(source) = &err else {
            panic!("unexpected error: {err:?}");
        };
        assert!(source.to_string().contains("restrictions"), "{source}");
        assert!(err.to_string().starts_with("failed to parse policy"));
    }

    #[test]
    fn parse_error_keeps_the_yaml_error_as_source() {
        let err = Policy::from_yaml_str("restrictions: [unclosed").unwrap_err();
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.downcast_ref::<serde_yaml::Error>().is_some());
    }

    #[test]
    fn reader_errors_carry_the_yaml_error_too() {
        let err = Policy::from_yaml_reader("restrictions:\n  special_groups: 3\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, PolicyError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn mis_shaped_field_is_an_error() {
        let err = Policy::from_yaml_str("restrictions:\n  forbidden_sci: 7\n").unwrap_err();
        assert!(matches!(err, PolicyError::Parse(_)));
    }

    #[test]
    fn non_integer_ordinal_is_an_error() {
        let text = "restrictions:\n  classifications: { U: low }\n";
        assert!(Policy::from_yaml_str(text).is_err());
    }
}
