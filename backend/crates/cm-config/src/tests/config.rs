use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.database.path.as_str(), eq("club.db"));
    assert_that!(config.auth.jwt_secret, eq(None));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [server]
            port = 9000

            [auth]
            jwt_secret = "12345678901234567890123456789012"
            access_ttl_secs = 600
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9000));
    assert_that!(config.auth.access_ttl_secs, eq(600));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_env_overrides_when_load_then_env_wins_over_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [server]
            port = 9000
        "#,
    )
    .unwrap();
    let _port = EnvGuard::set("CM_SERVER_PORT", "9100");
    let _secret = EnvGuard::set(
        "CM_AUTH_JWT_SECRET",
        "env-secret-that-is-long-enough-123456",
    );

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9100));
    assert_that!(
        config.auth.jwt_secret.as_deref(),
        eq(Some("env-secret-that-is-long-enough-123456"))
    );
}

#[test]
#[serial]
fn given_absolute_database_path_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _secret = EnvGuard::set(
        "CM_AUTH_JWT_SECRET",
        "12345678901234567890123456789012",
    );
    let _path = EnvGuard::set("CM_DATABASE_PATH", "/etc/club.db");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg.contains("relative"), eq(true));
}

#[test]
#[serial]
fn given_config_dir_env_when_database_path_then_joined() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let db_path = config.database_path().unwrap();

    // Then
    assert_that!(db_path, eq(temp.path().join("club.db")));
}
