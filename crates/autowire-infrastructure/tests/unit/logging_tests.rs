//! Tests for logging helpers

use autowire_domain::Error;
use autowire_infrastructure::logging::parse_log_level;
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").expect("trace"), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").expect("debug"), Level::DEBUG);
    assert_eq!(parse_log_level("warning").expect("warning"), Level::WARN);
    assert_eq!(parse_log_level("error").expect("error"), Level::ERROR);
}

#[test]
fn test_parse_invalid_log_level() {
    assert!(matches!(parse_log_level("verbose"), Err(Error::Configuration { .. })));
}
