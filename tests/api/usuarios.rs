//! Tests for the user management endpoints.

use frete_admin::{api, model::user::UsuarioPayload, ApiErrorKind};
use frete_admin_test_utils::prelude::*;
use mockito::Matcher;
use serde_json::json;

use crate::util::test_client;

/// Tests listing users.
///
/// Expected: the `usuarios` envelope is unwrapped
#[tokio::test]
async fn list_unwraps_envelope() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "GET",
            "/api/usuarios",
            200,
            json!({"usuarios": [
                data::mock_user(1, "admin", "admin"),
                data::mock_user(2, TEST_USERNAME, "user"),
            ]}),
            1,
        )
        .build()
        .await?;
    let api = test_client(&test);

    let usuarios = api::usuarios::list(&api.client)
        .await
        .unwrap()
        .into_success()
        .unwrap();

    assert_eq!(usuarios.len(), 2);
    assert!(usuarios[0].is_admin());
    assert_eq!(usuarios[1].username, TEST_USERNAME);
    test.assert_mocks();

    Ok(())
}

/// Tests fetching a user.
///
/// Expected: the `usuario` envelope is unwrapped
#[tokio::test]
async fn get_unwraps_single_envelope() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "GET",
            "/api/usuarios/2",
            200,
            json!({"usuario": data::mock_user(2, TEST_USERNAME, "user")}),
            1,
        )
        .build()
        .await?;
    let api = test_client(&test);

    let usuario = api::usuarios::get(&api.client, 2)
        .await
        .unwrap()
        .into_success()
        .unwrap();

    assert_eq!(usuario.id, 2);
    test.assert_mocks();

    Ok(())
}

/// Tests creating a user.
///
/// Expected: the payload is posted and the new identifier returned
#[tokio::test]
async fn create_posts_payload() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/usuarios")
                .match_body(Matcher::Json(json!({
                    "username": "novo",
                    "password": "segredo",
                    "role": "user",
                })))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(data::mock_mutation_result(Some(8)).to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let api = test_client(&test);
    let payload = UsuarioPayload {
        username: "novo".to_string(),
        password: Some("segredo".to_string()),
        role: "user".to_string(),
    };

    let result = api::usuarios::create(&api.client, &payload)
        .await
        .unwrap()
        .into_success()
        .unwrap();

    assert_eq!(result.id, Some(8));
    test.assert_mocks();

    Ok(())
}

/// Tests deleting the logged-in user.
///
/// Expected: Err(Application) with the server's refusal
#[tokio::test]
async fn delete_self_is_refused() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "DELETE",
            "/api/usuarios/1",
            400,
            json!({"error": "Você não pode excluir seu próprio usuário"}),
            1,
        )
        .build()
        .await?;
    let api = test_client(&test);

    let err = api::usuarios::delete(&api.client, 1).await.unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Application);
    assert_eq!(err.message(), "Você não pode excluir seu próprio usuário");
    test.assert_mocks();

    Ok(())
}
