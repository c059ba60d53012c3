use serde::Deserialize;

use crate::{
    api::{fetch, mutate, NoBody},
    error::ApiError,
    http::{ApiClient, Endpoint, Outcome, RouteParam},
    model::{
        api::MutationResult,
        transporte::{Praca, PracaPayload},
    },
};

#[derive(Deserialize)]
struct ListEnvelope {
    pracas: Vec<Praca>,
}

#[derive(Deserialize)]
struct ItemEnvelope {
    praca: Praca,
}

pub async fn list(client: &ApiClient) -> Result<Outcome<Vec<Praca>>, ApiError> {
    fetch(client, Endpoint::GetPracas, None, |e: ListEnvelope| e.pracas).await
}

/// Fetch a zone together with the municipalities it serves.
pub async fn get(client: &ApiClient, id: i64) -> Result<Outcome<Praca>, ApiError> {
    fetch(
        client,
        Endpoint::GetPraca,
        Some(RouteParam::from(id)),
        |e: ItemEnvelope| e.praca,
    )
    .await
}

pub async fn create(
    client: &ApiClient,
    payload: &PracaPayload,
) -> Result<Outcome<MutationResult>, ApiError> {
    mutate(client, Endpoint::CreatePraca, None, Some(payload)).await
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    payload: &PracaPayload,
) -> Result<Outcome<MutationResult>, ApiError> {
    mutate(
        client,
        Endpoint::UpdatePraca,
        Some(RouteParam::from(id)),
        Some(payload),
    )
    .await
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<Outcome<MutationResult>, ApiError> {
    mutate::<NoBody>(client, Endpoint::DeletePraca, Some(RouteParam::from(id)), None).await
}
