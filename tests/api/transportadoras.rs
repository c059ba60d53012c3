//! Tests for the carrier endpoints.

use frete_admin::{api, model::transporte::TransportadoraPayload};
use frete_admin_test_utils::prelude::*;
use serde_json::json;

use crate::util::test_client;

/// Tests listing carriers.
///
/// Expected: the envelope is unwrapped and unknown columns are kept
#[tokio::test]
async fn list_unwraps_envelope() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "GET",
            "/api/transportadoras",
            200,
            json!({"transportadoras": [
                data::mock_transportadora(1, "Rápido Sul"),
                data::mock_transportadora(2, "Expresso Norte"),
            ]}),
            1,
        )
        .build()
        .await?;
    let api = test_client(&test);

    let transportadoras = api::transportadoras::list(&api.client)
        .await
        .unwrap()
        .into_success()
        .unwrap();

    assert_eq!(transportadoras.len(), 2);
    assert_eq!(transportadoras[1].id, 2);
    assert_eq!(
        transportadoras[0].nome_fantasia.as_deref(),
        Some("Rápido Sul")
    );
    assert_eq!(transportadoras[0].extra.get("ATIVO"), Some(&json!(1)));
    test.assert_mocks();

    Ok(())
}

/// Tests fetching a single carrier.
///
/// Expected: the identifier is placed in the path
#[tokio::test]
async fn get_uses_identifier_in_path() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "GET",
            "/api/transportadoras/42",
            200,
            json!({"transportadora": data::mock_transportadora(42, "Rápido Sul")}),
            1,
        )
        .build()
        .await?;
    let api = test_client(&test);

    let transportadora = api::transportadoras::get(&api.client, 42)
        .await
        .unwrap()
        .into_success()
        .unwrap();

    assert_eq!(transportadora.id, 42);
    test.assert_mocks();

    Ok(())
}

/// Tests creating a carrier.
///
/// Expected: the new identifier is returned
#[tokio::test]
async fn create_returns_new_identifier() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "POST",
            "/api/transportadoras",
            200,
            data::mock_mutation_result(Some(7)),
            1,
        )
        .build()
        .await?;
    let api = test_client(&test);
    let payload = TransportadoraPayload {
        descricao: "Nova Transportes LTDA".to_string(),
        ..Default::default()
    };

    let result = api::transportadoras::create(&api.client, &payload)
        .await
        .unwrap()
        .into_success()
        .unwrap();

    assert!(result.success);
    assert_eq!(result.id, Some(7));
    test.assert_mocks();

    Ok(())
}

/// Tests deleting a carrier still referenced elsewhere.
///
/// Expected: Err(Application) with the server's explanation
#[tokio::test]
async fn delete_conflict_surfaces_server_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "DELETE",
            "/api/transportadoras/3",
            409,
            json!({"error": "Transportadora possui praças vinculadas"}),
            1,
        )
        .build()
        .await?;
    let api = test_client(&test);

    let err = api::transportadoras::delete(&api.client, 3)
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Transportadora possui praças vinculadas");
    assert_eq!(err.status(), Some(409));
    test.assert_mocks();

    Ok(())
}
