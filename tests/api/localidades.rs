//! Tests for the municipality and state lookups.

use frete_admin::{api, ApiErrorKind};
use frete_admin_test_utils::prelude::*;
use serde_json::json;

use crate::util::test_client;

/// Tests listing municipalities.
///
/// Expected: the `municipios` envelope is unwrapped
#[tokio::test]
async fn municipios_unwraps_envelope() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "GET",
            "/api/municipios",
            200,
            json!({"municipios": [
                data::mock_municipio(3550308, "São Paulo", "SP"),
                data::mock_municipio(3509502, "Campinas", "SP"),
            ]}),
            1,
        )
        .build()
        .await?;
    let api = test_client(&test);

    let municipios = api::localidades::municipios(&api.client)
        .await
        .unwrap()
        .into_success()
        .unwrap();

    assert_eq!(municipios.len(), 2);
    assert_eq!(municipios[1].codigo_ibge, 3509502);
    test.assert_mocks();

    Ok(())
}

/// Tests fetching a municipality by IBGE code.
///
/// Expected: the code is placed in the path and the `municipio` envelope unwrapped
#[tokio::test]
async fn municipio_uses_ibge_code_in_path() -> Result<(), TestError> {
    let mut municipio = data::mock_municipio(3509502, "Campinas", "SP");
    municipio["faixas_cep"] = json!([{"cep_inicial": "13000000", "cep_final": "13139999"}]);
    let test = TestBuilder::new()
        .with_json_endpoint(
            "GET",
            "/api/municipios/3509502",
            200,
            json!({"municipio": municipio}),
            1,
        )
        .build()
        .await?;
    let api = test_client(&test);

    let municipio = api::localidades::municipio(&api.client, 3509502_i64)
        .await
        .unwrap()
        .into_success()
        .unwrap();

    assert_eq!(municipio.municipio, "Campinas");
    assert_eq!(municipio.faixas_cep.len(), 1);
    test.assert_mocks();

    Ok(())
}

/// Tests listing states.
///
/// Expected: the `estados` envelope is unwrapped
#[tokio::test]
async fn estados_unwraps_envelope() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "GET",
            "/api/estados",
            200,
            json!({"estados": [data::mock_estado("SP", "São Paulo"), data::mock_estado("RJ", "Rio de Janeiro")]}),
            1,
        )
        .build()
        .await?;
    let api = test_client(&test);

    let estados = api::localidades::estados(&api.client)
        .await
        .unwrap()
        .into_success()
        .unwrap();

    assert_eq!(estados.len(), 2);
    assert_eq!(estados[1].uf, "RJ");
    test.assert_mocks();

    Ok(())
}

/// Tests fetching a state by its abbreviation.
///
/// Expected: the abbreviation is placed in the path and the `estado` envelope unwrapped
#[tokio::test]
async fn estado_uses_uf_in_path() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "GET",
            "/api/estados/SP",
            200,
            json!({"estado": data::mock_estado("SP", "São Paulo")}),
            1,
        )
        .build()
        .await?;
    let api = test_client(&test);

    let estado = api::localidades::estado(&api.client, "SP")
        .await
        .unwrap()
        .into_success()
        .unwrap();

    assert_eq!(estado.nome, "São Paulo");
    assert_eq!(estado.extra.get("Regiao"), Some(&json!("Sudeste")));
    test.assert_mocks();

    Ok(())
}

/// Tests an unknown state.
///
/// Expected: Err(Application) with the server's message
#[tokio::test]
async fn unknown_estado_surfaces_server_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "GET",
            "/api/estados/XX",
            404,
            json!({"error": "Estado não encontrado"}),
            1,
        )
        .build()
        .await?;
    let api = test_client(&test);

    let err = api::localidades::estado(&api.client, "XX").await.unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Application);
    assert_eq!(err.message(), "Estado não encontrado");
    test.assert_mocks();

    Ok(())
}
