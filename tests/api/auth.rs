//! Tests for the login and logout flows.

use frete_admin::{api, model::user::LoginRequest, ApiErrorKind, Outcome};
use frete_admin_test_utils::prelude::*;
use mockito::Matcher;
use serde_json::json;

use crate::util::test_client;

fn login_request() -> LoginRequest {
    LoginRequest::new(TEST_USERNAME, TEST_PASSWORD).unwrap()
}

/// Tests a successful login followed by an authenticated request.
///
/// Expected: the issued token and user are stored and sent with the next request
#[tokio::test]
async fn login_stores_token_for_later_requests() -> Result<(), TestError> {
    let mut test = test_setup!()?;
    let user = data::mock_user(3, TEST_USERNAME, "admin");
    let login = test.api().create_login_endpoint(user.clone(), 1);
    let perfil = test.api().create_perfil_endpoint(user, 1);
    test.mocks.extend([login, perfil]);
    let api = test_client(&test);

    let response = api::auth::login(&api.client, &login_request())
        .await
        .unwrap()
        .into_success()
        .unwrap();

    assert!(response.success);
    assert_eq!(api.session().token(), TEST_CSRF_TOKEN);
    assert!(api.session().is_authenticated());

    let perfil = api::perfil::get(&api.client).await.unwrap();

    assert_eq!(perfil.success().map(|user| user.is_admin()), Some(true));
    test.assert_mocks();

    Ok(())
}

/// Tests a login with wrong credentials.
///
/// Expected: Err(Application) with the server's message and an untouched session
#[tokio::test]
async fn invalid_credentials_surface_server_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint("POST", "/login", 401, data::mock_login_failure(), 1)
        .build()
        .await?;
    let api = test_client(&test);

    let err = api::auth::login(&api.client, &login_request())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Application);
    assert_eq!(err.message(), "Credenciais inválidas");
    assert_eq!(api.session().token(), "");
    assert!(!api.session().is_authenticated());
    test.assert_mocks();

    Ok(())
}

/// Tests a login refused with a 200 status.
///
/// Expected: Err(Application) carrying the server's reason and an untouched session
#[tokio::test]
async fn login_refused_with_ok_status_keeps_server_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "POST",
            "/login",
            200,
            json!({"success": false, "message": "Usuário bloqueado"}),
            1,
        )
        .build()
        .await?;
    let api = test_client(&test);

    let err = api::auth::login(&api.client, &login_request())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Application);
    assert_eq!(err.status(), Some(200));
    assert_eq!(err.message(), "Usuário bloqueado");
    assert!(!api.session().is_authenticated());
    test.assert_mocks();

    Ok(())
}

/// Tests a refused login whose body gives no reason.
///
/// Expected: Err(Application) with the default Portuguese message
#[tokio::test]
async fn login_refused_without_message_uses_default() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint("POST", "/login", 200, json!({"success": false}), 1)
        .build()
        .await?;
    let api = test_client(&test);

    let err = api::auth::login(&api.client, &login_request())
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Usuário ou senha inválidos");
    test.assert_mocks();

    Ok(())
}

/// Tests the login request body.
///
/// Expected: credentials and the remember flag are posted as JSON
#[tokio::test]
async fn login_posts_credentials_as_json() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/login")
                .match_header("content-type", "application/json")
                .match_body(Matcher::Json(json!({
                    "username": TEST_USERNAME,
                    "password": TEST_PASSWORD,
                    "remember": true,
                })))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(data::mock_login_success(data::mock_user(1, TEST_USERNAME, "user")).to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let api = test_client(&test);

    let result = api::auth::login(&api.client, &login_request().remember(true)).await;

    assert!(matches!(result, Ok(Outcome::Success(_))));
    test.assert_mocks();

    Ok(())
}

/// Tests logging out.
///
/// Expected: the server is told and the local session is forgotten
#[tokio::test]
async fn logout_clears_session() -> Result<(), TestError> {
    let mut test = test_setup!()?;
    let logout = test.api().create_logout_endpoint(1);
    test.mocks.push(logout);
    let api = test_client(&test);
    api.session().set_token(TEST_CSRF_TOKEN);

    let result = api::auth::logout(&api.client).await;

    assert_eq!(result, Ok(Outcome::Success(())));
    assert_eq!(api.session().token(), "");
    test.assert_mocks();

    Ok(())
}

/// Tests logging out when the server session already expired.
///
/// Expected: a login redirect, with the local session forgotten anyway
#[tokio::test]
async fn logout_clears_session_on_redirect() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_html_endpoint("POST", "/logout", 401, 1)
        .build()
        .await?;
    let api = test_client(&test);
    api.session().set_token(TEST_CSRF_TOKEN);

    let result = api::auth::logout(&api.client).await;

    assert_eq!(result, Ok(Outcome::AuthRedirect));
    assert_eq!(api.session().token(), "");
    assert_eq!(api.navigator.last_redirect(), Some("/login".to_string()));

    Ok(())
}
