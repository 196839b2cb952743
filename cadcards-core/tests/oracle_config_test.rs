//! Integration tests for oracle configuration and offline behavior
//!
//! Tests use static fixtures in `tests/fixtures/oracle/`:
//! - custom/    - every field overridden, custom API key variable
//! - malformed/ - unparseable config.json
//!
//! Tests touching environment variables run serially.

mod common;

use cadcards_core::catalog::Category;
use cadcards_core::directory::seed_projects;
use cadcards_core::oracle::{AvatarResult, FieldCodeDecoding, Oracle, OracleConfig, OFFLINE_MESSAGE};
use common::{fixtures_path, init_test_logging};
use serial_test::serial;

const TEST_KEY_ENV: &str = "CADCARDS_TEST_ORACLE_KEY";

fn custom_config() -> OracleConfig {
    OracleConfig::load_from_dir(&fixtures_path().join("oracle/custom"))
        .expect("custom fixture should load")
}

#[test]
fn test_custom_config_fields() {
    let config = custom_config();
    assert!(config.enabled);
    assert_eq!(config.backend, "gemini");
    assert_eq!(config.model, "gemini-2.5-pro");
    assert_eq!(config.api_key_env, TEST_KEY_ENV);
    assert_eq!(config.timeout_seconds, 2);
    assert!(!config.dry_run);
}

#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let config = OracleConfig::load_from_dir(&fixtures_path().join("oracle/malformed"))
        .expect("directory exists");
    assert_eq!(config, OracleConfig::default());
}

#[test]
fn test_missing_dir_yields_none() {
    assert!(OracleConfig::load_from_dir(&fixtures_path().join("oracle/absent")).is_none());
}

#[tokio::test]
#[serial]
async fn test_missing_key_is_offline_and_fails_soft() {
    init_test_logging();
    std::env::remove_var(TEST_KEY_ENV);

    let oracle = Oracle::new(custom_config());
    assert!(!oracle.is_online());

    assert_eq!(oracle.category_lore(Category::Blocks).await, OFFLINE_MESSAGE);
    assert_eq!(
        oracle.decode_field_code("FND 1/2 IP").await,
        Some(FieldCodeDecoding::offline())
    );
    assert!(oracle.decode_field_code("").await.is_none());
    assert_eq!(
        oracle.project_scope(&seed_projects()[0]).await,
        OFFLINE_MESSAGE
    );
    assert!(matches!(
        oracle.avatar("survey tech", None).await,
        AvatarResult::Unavailable(_)
    ));
}

#[tokio::test]
#[serial]
async fn test_blank_key_is_offline() {
    std::env::set_var(TEST_KEY_ENV, "   ");
    let oracle = Oracle::new(custom_config());
    std::env::remove_var(TEST_KEY_ENV);
    assert!(!oracle.is_online());
}

#[cfg(feature = "oracle")]
#[test]
#[serial]
fn test_key_present_brings_oracle_online() {
    init_test_logging();
    std::env::set_var(TEST_KEY_ENV, "test-key");
    let mut oracle = Oracle::new(custom_config());
    std::env::remove_var(TEST_KEY_ENV);

    assert!(oracle.is_online());
    oracle.override_model("gemini-2.5-flash-lite".to_string());
    assert_eq!(oracle.config().model, "gemini-2.5-flash-lite");
}

#[test]
#[serial]
fn test_unknown_backend_is_offline() {
    std::env::set_var(TEST_KEY_ENV, "test-key");
    let oracle = Oracle::new(OracleConfig {
        backend: "carrier-pigeon".to_string(),
        ..custom_config()
    });
    std::env::remove_var(TEST_KEY_ENV);
    assert!(!oracle.is_online());
}
