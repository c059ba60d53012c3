//! Tests for overlapping requests on one client.

use frete_admin::{Endpoint, Outcome, RequestOptions};
use frete_admin_test_utils::prelude::*;
use serde_json::json;

use crate::util::test_client;

/// Tests two requests in flight at the same time.
///
/// Expected: both complete with their own data
#[tokio::test]
async fn overlapping_requests_complete_independently() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint("GET", "/api/pracas", 200, json!({"pracas": []}), 1)
        .with_json_endpoint(
            "GET",
            "/api/transportadoras",
            200,
            json!({"transportadoras": [data::mock_transportadora(1, "Rápido Sul")]}),
            1,
        )
        .build()
        .await?;
    let api = test_client(&test);

    let (pracas, transportadoras) = tokio::join!(
        api.client
            .send_json(Endpoint::GetPracas, RequestOptions::get()),
        api.client
            .send_json(Endpoint::GetTransportadoras, RequestOptions::get()),
    );

    assert_eq!(pracas, Ok(Outcome::Success(json!({"pracas": []}))));
    let transportadoras = transportadoras.unwrap().success().unwrap();
    assert_eq!(transportadoras["transportadoras"][0]["NOME_FAN"], "Rápido Sul");
    test.assert_mocks();

    Ok(())
}

/// Tests a login redirect while another request is in flight.
///
/// Expected: the redirect does not affect the other request's result
#[tokio::test]
async fn redirect_does_not_affect_other_requests() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_html_endpoint("GET", "/api/perfil", 403, 1)
        .with_json_endpoint("GET", "/api/estados", 200, json!({"estados": []}), 1)
        .build()
        .await?;
    let api = test_client(&test);

    let (perfil, estados) = tokio::join!(
        api.client
            .send_json(Endpoint::GetPerfil, RequestOptions::get()),
        api.client
            .send_json(Endpoint::GetEstados, RequestOptions::get()),
    );

    assert_eq!(perfil, Ok(Outcome::AuthRedirect));
    assert_eq!(estados, Ok(Outcome::Success(json!({"estados": []}))));
    assert_eq!(api.navigator.last_redirect(), Some("/login".to_string()));

    Ok(())
}
