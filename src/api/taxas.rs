use serde::Deserialize;

use crate::{
    api::fetch,
    error::ApiError,
    http::{ApiClient, Endpoint, Outcome},
    model::transporte::{TaxaTipo, TaxaTransporte},
};

#[derive(Deserialize)]
struct TiposEnvelope {
    taxa_tipos: Vec<TaxaTipo>,
}

#[derive(Deserialize)]
struct TransportesEnvelope {
    taxa_transportes: Vec<TaxaTransporte>,
}

pub async fn tipos(client: &ApiClient) -> Result<Outcome<Vec<TaxaTipo>>, ApiError> {
    fetch(client, Endpoint::GetTaxaTipos, None, |e: TiposEnvelope| e.taxa_tipos).await
}

pub async fn transportes(client: &ApiClient) -> Result<Outcome<Vec<TaxaTransporte>>, ApiError> {
    fetch(client, Endpoint::GetTaxaTransportes, None, |e: TransportesEnvelope| {
        e.taxa_transportes
    })
    .await
}
