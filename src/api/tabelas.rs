use serde::Deserialize;

use crate::{
    api::{fetch, mutate, NoBody},
    error::ApiError,
    http::{ApiClient, Endpoint, Outcome, RouteParam},
    model::{
        api::MutationResult,
        transporte::{TabelaPreco, TabelaPrecoPayload},
    },
};

#[derive(Deserialize)]
struct ListEnvelope {
    tpracas: Vec<TabelaPreco>,
}

#[derive(Deserialize)]
struct ItemEnvelope {
    tpraca: TabelaPreco,
}

pub async fn list(client: &ApiClient) -> Result<Outcome<Vec<TabelaPreco>>, ApiError> {
    fetch(client, Endpoint::GetTabelasPreco, None, |e: ListEnvelope| e.tpracas).await
}

/// Fetch a price table with its brackets and fees.
pub async fn get(client: &ApiClient, id: i64) -> Result<Outcome<TabelaPreco>, ApiError> {
    fetch(
        client,
        Endpoint::GetTabelaPreco,
        Some(RouteParam::from(id)),
        |e: ItemEnvelope| e.tpraca,
    )
    .await
}

pub async fn create(
    client: &ApiClient,
    payload: &TabelaPrecoPayload,
) -> Result<Outcome<MutationResult>, ApiError> {
    mutate(client, Endpoint::CreateTabelaPreco, None, Some(payload)).await
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    payload: &TabelaPrecoPayload,
) -> Result<Outcome<MutationResult>, ApiError> {
    mutate(
        client,
        Endpoint::UpdateTabelaPreco,
        Some(RouteParam::from(id)),
        Some(payload),
    )
    .await
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<Outcome<MutationResult>, ApiError> {
    mutate::<NoBody>(
        client,
        Endpoint::DeleteTabelaPreco,
        Some(RouteParam::from(id)),
        None,
    )
    .await
}
