use serde::Deserialize;

use crate::{
    api::{fetch, mutate, NoBody},
    error::ApiError,
    http::{ApiClient, Endpoint, Outcome, RouteParam},
    model::{
        api::MutationResult,
        transporte::{Transportadora, TransportadoraPayload},
    },
};

#[derive(Deserialize)]
struct ListEnvelope {
    transportadoras: Vec<Transportadora>,
}

#[derive(Deserialize)]
struct ItemEnvelope {
    transportadora: Transportadora,
}

pub async fn list(client: &ApiClient) -> Result<Outcome<Vec<Transportadora>>, ApiError> {
    fetch(client, Endpoint::GetTransportadoras, None, |e: ListEnvelope| {
        e.transportadoras
    })
    .await
}

pub async fn get(client: &ApiClient, id: i64) -> Result<Outcome<Transportadora>, ApiError> {
    fetch(
        client,
        Endpoint::GetTransportadora,
        Some(RouteParam::from(id)),
        |e: ItemEnvelope| e.transportadora,
    )
    .await
}

pub async fn create(
    client: &ApiClient,
    payload: &TransportadoraPayload,
) -> Result<Outcome<MutationResult>, ApiError> {
    mutate(client, Endpoint::CreateTransportadora, None, Some(payload)).await
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    payload: &TransportadoraPayload,
) -> Result<Outcome<MutationResult>, ApiError> {
    mutate(
        client,
        Endpoint::UpdateTransportadora,
        Some(RouteParam::from(id)),
        Some(payload),
    )
    .await
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<Outcome<MutationResult>, ApiError> {
    mutate::<NoBody>(
        client,
        Endpoint::DeleteTransportadora,
        Some(RouteParam::from(id)),
        None,
    )
    .await
}
