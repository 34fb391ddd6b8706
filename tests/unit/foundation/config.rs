use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = AnimatorConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, AnimatorConfig::default());
    assert_eq!(cfg.default_provider, Provider::Qianwen);
    assert_eq!(cfg.latency(), Duration::from_millis(1500));
}

#[test]
fn fields_override_defaults() {
    let json = r#"{ "default_provider": "deepseek", "latency_ms": 0, "storage_path": "keys.json" }"#;
    let cfg = AnimatorConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.default_provider, Provider::DeepSeek);
    assert_eq!(cfg.latency_ms, 0);
    assert_eq!(cfg.storage_path, Some(PathBuf::from("keys.json")));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = AnimatorConfig::from_reader(r#"{ "latency": 3 }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, AnimatorError::Serde(_)));
}

#[test]
fn missing_file_is_a_validation_error() {
    let err = AnimatorConfig::from_path(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("open config"));
}
