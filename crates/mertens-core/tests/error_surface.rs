use mertens_core::errors::{ErrorInfo, MertensError, INVALID_ARGUMENT};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("n", "0")
        .with_context("reason", "example")
}

#[test]
fn input_error_surface() {
    let err = MertensError::Input(sample_info("I001", "non positive"));
    assert_eq!(err.info().code, "I001");
    assert!(err.info().context.contains_key("n"));
}

#[test]
fn config_error_surface() {
    let err = MertensError::Config(sample_info("C001", "empty range"));
    assert_eq!(err.info().code, "C001");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn serde_error_surface() {
    let err = MertensError::Serde(sample_info("S001", "schema mismatch"));
    assert_eq!(err.info().code, "S001");
}

#[test]
fn io_error_surface() {
    let err = MertensError::Io(sample_info("O001", "permission denied"));
    assert_eq!(err.info().code, "O001");
}

#[test]
fn invalid_input_carries_argument_and_value() {
    let err = MertensError::invalid_input("upper_bound", -3);
    assert!(matches!(err, MertensError::Input(_)));
    let info = err.info();
    assert_eq!(info.code, INVALID_ARGUMENT);
    assert_eq!(info.context.get("argument").map(String::as_str), Some("upper_bound"));
    assert_eq!(info.context.get("value").map(String::as_str), Some("-3"));
    assert!(info.hint.is_some());
}
