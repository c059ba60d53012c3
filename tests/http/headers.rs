//! Tests for the headers ApiClient attaches to every request.

use frete_admin::{ApiErrorKind, Endpoint, RequestOptions};
use frete_admin_test_utils::prelude::*;
use serde_json::json;

use crate::util::test_client;

fn perfil_mock(
    server: &mut mockito::ServerGuard,
    token: &'static str,
    expected_requests: usize,
) -> mockito::Mock {
    server
        .mock("GET", "/api/perfil")
        .match_header("x-csrftoken", token)
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(data::mock_user(1, TEST_USERNAME, "user").to_string())
        .expect(expected_requests)
        .create()
}

/// Tests the default headers of an authenticated request.
///
/// Expected: JSON content type and the session's CSRF token
#[tokio::test]
async fn sends_session_token_and_content_type() -> Result<(), TestError> {
    let test = test_setup!(|server: &mut mockito::ServerGuard| perfil_mock(
        server,
        TEST_CSRF_TOKEN,
        1
    ))?;
    let api = test_client(&test);
    api.session().set_token(TEST_CSRF_TOKEN);

    let result = api
        .client
        .send_json(Endpoint::GetPerfil, RequestOptions::get())
        .await;

    assert!(result.is_ok());
    test.assert_mocks();

    Ok(())
}

/// Tests a request sent before any token was issued.
///
/// Expected: the CSRF header is present and empty
#[tokio::test]
async fn sends_empty_token_before_login() -> Result<(), TestError> {
    let test = test_setup!(|server: &mut mockito::ServerGuard| perfil_mock(server, "", 1))?;
    let api = test_client(&test);

    let result = api
        .client
        .send_json(Endpoint::GetPerfil, RequestOptions::get())
        .await;

    assert!(result.is_ok());
    test.assert_mocks();

    Ok(())
}

/// Tests that the token is read when each request is built.
///
/// Expected: each request carries the token current at call time
#[tokio::test]
async fn reads_token_at_call_time() -> Result<(), TestError> {
    let test = test_setup!(
        |server: &mut mockito::ServerGuard| perfil_mock(server, "first", 1),
        |server: &mut mockito::ServerGuard| perfil_mock(server, "second", 1),
    )?;
    let api = test_client(&test);

    api.session().set_token("first");
    let first = api
        .client
        .send_json(Endpoint::GetPerfil, RequestOptions::get())
        .await;
    api.session().set_token("second");
    let second = api
        .client
        .send_json(Endpoint::GetPerfil, RequestOptions::get())
        .await;

    assert!(first.is_ok());
    assert!(second.is_ok());
    test.assert_mocks();

    Ok(())
}

/// Tests caller headers colliding with defaults.
///
/// Expected: the caller's value replaces the session token
#[tokio::test]
async fn caller_header_overrides_token() -> Result<(), TestError> {
    let test = test_setup!(|server: &mut mockito::ServerGuard| perfil_mock(server, "manual", 1))?;
    let api = test_client(&test);
    api.session().set_token(TEST_CSRF_TOKEN);

    let result = api
        .client
        .send_json(
            Endpoint::GetPerfil,
            RequestOptions::get().header("X-CSRFToken", "manual"),
        )
        .await;

    assert!(result.is_ok());
    test.assert_mocks();

    Ok(())
}

/// Tests a GET request carrying a body.
///
/// Expected: Err(InvalidRequest) and nothing reaches the backend
#[tokio::test]
async fn get_with_body_is_never_sent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint("GET", "/api/pracas", 200, json!({"pracas": []}), 0)
        .build()
        .await?;
    let api = test_client(&test);

    let err = api
        .client
        .send_json(
            Endpoint::GetPracas,
            RequestOptions::get().body(json!({"filtro": "SP"})),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::InvalidRequest);
    test.assert_mocks();

    Ok(())
}

/// Tests a caller header that cannot be put on the wire.
///
/// Expected: Err(InvalidRequest) and no request reaches the server
#[tokio::test]
async fn invalid_caller_header_is_rejected_before_sending() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint("GET", "/api/pracas", 200, json!({"pracas": []}), 0)
        .build()
        .await?;
    let api = test_client(&test);

    let err = api
        .client
        .send_json(
            Endpoint::GetPracas,
            RequestOptions::get().header("X-Filtro", "SP\nX-Injected: 1"),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::InvalidRequest);
    test.assert_mocks();

    Ok(())
}

/// Tests a session token holding a line break.
///
/// Expected: Err(InvalidRequest) rather than a transport failure, nothing sent
#[tokio::test]
async fn malformed_session_token_is_rejected_before_sending() -> Result<(), TestError> {
    let test = test_setup!(|server: &mut mockito::ServerGuard| perfil_mock(server, "", 0))?;
    let api = test_client(&test);
    api.session().set_token("abc\r\ndef");

    let err = api
        .client
        .send_json(Endpoint::GetPerfil, RequestOptions::get())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::InvalidRequest);
    test.assert_mocks();

    Ok(())
}
