use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Auth
// =========================================================================

#[test]
#[serial]
fn given_no_jwt_secret_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("jwt_secret"));
}

#[test]
#[serial]
fn given_jwt_secret_too_short_when_validate_then_error_mentions_32_characters() {
    // Given
    let _temp = setup_config_dir();
    let _secret = EnvGuard::set("CM_AUTH_JWT_SECRET", "tooshort");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("32 characters"));
}

#[test]
#[serial]
fn given_jwt_secret_exactly_32_chars_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _secret = EnvGuard::set("CM_AUTH_JWT_SECRET", "12345678901234567890123456789012");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_invalid_default_organization_id_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _secret = EnvGuard::set("CM_AUTH_JWT_SECRET", "12345678901234567890123456789012");
    let _org = EnvGuard::set("CM_AUTH_DEFAULT_ORGANIZATION_ID", "not-a-uuid");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("default_organization_id"));
}

#[test]
#[serial]
fn given_no_refresh_secret_when_resolved_then_falls_back_to_jwt_secret() {
    // Given
    let _temp = setup_config_dir();
    let _secret = EnvGuard::set("CM_AUTH_JWT_SECRET", "12345678901234567890123456789012");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.auth.refresh_secret_or_default(),
        eq(Some("12345678901234567890123456789012"))
    );
}
