use crate::tests::{EnvGuard, setup_config_dir};
use crate::{ApiConfig, Config, ListScopeMode, OwnerField};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_timeout_zero_when_validate_then_error() {
    // Given
    let _env = setup_config_dir();
    let _timeout = EnvGuard::set("ASESOR_API_TIMEOUT_SECS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_timeout_over_max_when_validate_then_error() {
    // Given
    let _env = setup_config_dir();
    let _timeout = EnvGuard::set("ASESOR_API_TIMEOUT_SECS", "301");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_non_url_base_when_validate_then_error() {
    // Given
    let _env = setup_config_dir();
    let _url = EnvGuard::set("ASESOR_API_BASE_URL", "not a url");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_ftp_base_when_validate_then_error() {
    // Given
    let _env = setup_config_dir();
    let _url = EnvGuard::set("ASESOR_API_BASE_URL", "ftp://example.com");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_default_api_config_then_timeout_is_thirty_seconds() {
    let api = ApiConfig::default();

    assert_that!(api.timeout(), eq(Duration::from_secs(30)));
    assert_that!(api.validate(), ok(anything()));
    assert_that!(api.needs_user_id(), eq(false));
}

#[test]
fn given_user_id_list_scope_then_user_id_needed() {
    let api = ApiConfig {
        list_scope: ListScopeMode::UserId,
        ..ApiConfig::default()
    };

    assert_that!(api.needs_user_id(), eq(true));
}

#[test]
fn given_user_id_owner_field_then_user_id_needed() {
    let api = ApiConfig {
        owner_field: OwnerField::UserId,
        ..ApiConfig::default()
    };

    assert_that!(api.needs_user_id(), eq(true));
}

#[test]
fn given_scope_names_when_parsed_then_match() {
    assert_that!("token".parse::<ListScopeMode>().unwrap(), eq(ListScopeMode::Token));
    assert_that!(
        " USER_ID ".parse::<ListScopeMode>().unwrap(),
        eq(ListScopeMode::UserId)
    );
    assert_that!("nobody".parse::<ListScopeMode>(), err(anything()));
    assert_that!("user_id".parse::<OwnerField>().unwrap(), eq(OwnerField::UserId));
    assert_that!("token".parse::<OwnerField>(), err(anything()));
}
