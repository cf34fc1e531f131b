use crate::options::*;
use std::io::Write;

#[test]
fn test_defaults() {
    let options = CompletionOptions::default();
    assert!(options.signature_details);
    assert!(options.include_proto_members);
    assert_eq!(options.jsx_insert_suffix, "=");
    assert!(options.excluded_members.is_empty());
}

#[test]
fn test_partial_json_keeps_defaults() {
    let options =
        CompletionOptions::from_json_str(r#"{"signatureDetails": false, "excludedMembers": ["x"]}"#)
            .expect("valid options");
    assert!(!options.signature_details);
    assert!(options.include_proto_members, "unset fields keep defaults");
    assert_eq!(options.excluded_members, vec!["x".to_string()]);
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let err = CompletionOptions::from_json_str("{").unwrap_err();
    assert!(matches!(err, OptionsError::Parse(_)));
}

#[test]
fn test_from_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{"jsxInsertSuffix": "={{}}"}}"#).expect("write options");
    let options = CompletionOptions::from_path(file.path()).expect("load options");
    assert_eq!(options.jsx_insert_suffix, "={}");
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = CompletionOptions::from_path(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, OptionsError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_env_override() {
    let mut options = CompletionOptions::default();
    options
        .apply_env_overrides_with(|var| (var == SIGNATURE_DETAILS_ENV).then(|| "0".to_string()))
        .expect("valid override");
    assert!(!options.signature_details);

    options
        .apply_env_overrides_with(|_| None)
        .expect("no override");
    assert!(!options.signature_details, "absent variable changes nothing");

    let err = options
        .apply_env_overrides_with(|_| Some("yes".to_string()))
        .unwrap_err();
    assert!(matches!(err, OptionsError::InvalidEnv { .. }));
}
