use serde::Deserialize;

use crate::{
    api::fetch,
    error::ApiError,
    http::{ApiClient, Endpoint, Outcome, RouteParam},
    model::localidade::{Estado, Municipio},
};

#[derive(Deserialize)]
struct MunicipiosEnvelope {
    municipios: Vec<Municipio>,
}

#[derive(Deserialize)]
struct MunicipioEnvelope {
    municipio: Municipio,
}

#[derive(Deserialize)]
struct EstadosEnvelope {
    estados: Vec<Estado>,
}

#[derive(Deserialize)]
struct EstadoEnvelope {
    estado: Estado,
}

pub async fn municipios(client: &ApiClient) -> Result<Outcome<Vec<Municipio>>, ApiError> {
    fetch(client, Endpoint::GetMunicipios, None, |e: MunicipiosEnvelope| {
        e.municipios
    })
    .await
}

/// Fetch a municipality by IBGE code, with its CEP ranges.
pub async fn municipio(
    client: &ApiClient,
    ibge: impl Into<RouteParam>,
) -> Result<Outcome<Municipio>, ApiError> {
    fetch(
        client,
        Endpoint::GetMunicipio,
        Some(ibge.into()),
        |e: MunicipioEnvelope| e.municipio,
    )
    .await
}

pub async fn estados(client: &ApiClient) -> Result<Outcome<Vec<Estado>>, ApiError> {
    fetch(client, Endpoint::GetEstados, None, |e: EstadosEnvelope| e.estados).await
}

pub async fn estado(
    client: &ApiClient,
    uf: impl Into<RouteParam>,
) -> Result<Outcome<Estado>, ApiError> {
    fetch(
        client,
        Endpoint::GetEstado,
        Some(uf.into()),
        |e: EstadoEnvelope| e.estado,
    )
    .await
}
