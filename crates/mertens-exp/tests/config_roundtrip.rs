use std::fs;

use mertens_arith::{Method, MAX_UPPER_BOUND};
use mertens_core::MertensError;
use mertens_exp::{ExportConfig, SeriesConfig};

#[test]
fn yaml_fields_override_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("series.yaml");
    fs::write(
        &path,
        "upper_bound: 1000\nmethod: sieve\nexport:\n  csv: false\n",
    )
    .expect("write config");

    let config = SeriesConfig::load(&path).expect("load");
    assert_eq!(config.upper_bound, 1000);
    assert_eq!(config.method, Method::Sieve);
    assert_eq!(
        config.export,
        ExportConfig {
            json: true,
            csv: false
        }
    );
}

#[test]
fn empty_document_uses_defaults() {
    let config: SeriesConfig = serde_yaml::from_str("{}").expect("parse");
    assert_eq!(config, SeriesConfig::default());
    assert_eq!(config.upper_bound, 500);
    assert_eq!(config.method, Method::TrialDivision);
}

#[test]
fn json_configs_are_accepted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("series.json");
    fs::write(&path, r#"{"upper_bound": 12, "method": "trial-division"}"#).expect("write");
    let config = SeriesConfig::load(&path).expect("load");
    assert_eq!(config.upper_bound, 12);
}

#[test]
fn zero_bound_is_rejected_on_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("series.yaml");
    fs::write(&path, "upper_bound: 0\n").expect("write");
    let err = SeriesConfig::load(&path).unwrap_err();
    assert!(matches!(err, MertensError::Config(_)));
    assert_eq!(err.info().code, "empty-range");
}

#[test]
fn read_defers_validation_to_the_caller() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("series.yaml");
    fs::write(&path, "upper_bound: 0\n").expect("write");
    let mut config = SeriesConfig::read(&path).expect("read");
    assert_eq!(config.upper_bound, 0);
    assert!(config.validate().is_err());
    config.upper_bound = 10;
    config.validate().expect("valid after override");
}

#[test]
fn bounds_above_the_cap_are_rejected() {
    let config = SeriesConfig {
        upper_bound: MAX_UPPER_BOUND + 1,
        ..SeriesConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, MertensError::Config(_)));
    assert_eq!(err.info().code, "range-too-large");

    let at_cap = SeriesConfig {
        upper_bound: MAX_UPPER_BOUND,
        ..SeriesConfig::default()
    };
    assert!(at_cap.validate().is_ok());
}

#[test]
fn unknown_method_is_a_serde_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("series.yaml");
    fs::write(&path, "method: wheel\n").expect("write");
    assert!(matches!(
        SeriesConfig::load(&path),
        Err(MertensError::Serde(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = SeriesConfig::load(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, MertensError::Io(_)));
    assert!(err.info().context.contains_key("path"));
}
