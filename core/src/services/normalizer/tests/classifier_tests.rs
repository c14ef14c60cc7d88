//! Unit tests for the code classifier

use crate::domain::entities::ErrorKind;
use crate::services::normalizer::classify;

#[test]
fn test_documented_codes() {
    assert_eq!(classify("form_password_pwned"), ErrorKind::Authentication);
    assert_eq!(classify("form_email_invalid_format"), ErrorKind::Validation);
    assert_eq!(classify("network_timeout"), ErrorKind::Network);
    assert_eq!(classify("totally_unrecognized_code"), ErrorKind::Unknown);
}

#[test]
fn test_each_pattern() {
    assert_eq!(classify("oauth_access_denied"), ErrorKind::Authentication);
    assert_eq!(classify("validation_failed"), ErrorKind::Validation);
    assert_eq!(classify("connection_refused"), ErrorKind::Network);
    assert_eq!(classify(""), ErrorKind::Unknown);
}

#[test]
fn test_authentication_rule_checked_first() {
    assert_eq!(classify("email_password_mismatch"), ErrorKind::Authentication);
    assert_eq!(classify("auth_network_down"), ErrorKind::Authentication);
    assert_eq!(classify("email_connection_lost"), ErrorKind::Validation);
}

#[test]
fn test_matching_is_case_sensitive() {
    assert_eq!(classify("FORM_PASSWORD_PWNED"), ErrorKind::Unknown);
    assert_eq!(classify("Network_Timeout"), ErrorKind::Unknown);
}

#[test]
fn test_table_codes_without_patterns_are_unknown() {
    assert_eq!(classify("form_identifier_not_found"), ErrorKind::Unknown);
    assert_eq!(classify("captcha_invalid"), ErrorKind::Unknown);
    assert_eq!(classify("session_token_revoked"), ErrorKind::Unknown);
}
