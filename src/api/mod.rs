//! Typed wrappers over [`ApiClient::send`] for each backend resource.
//!
//! List and detail endpoints wrap their payload in a named envelope (`{"pracas": [...]}`);
//! these functions unwrap it and keep the [`Outcome`] so callers still see login redirects.

pub mod auth;
pub mod frete;
pub mod localidades;
pub mod perfil;
pub mod pracas;
pub mod tabelas;
pub mod taxas;
pub mod transportadoras;
pub mod usuarios;

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::ApiError,
    http::{ApiClient, Endpoint, Outcome, RequestOptions, RouteParam},
    model::api::MutationResult,
};

/// Fetch an endpoint and extract the payload from its envelope.
async fn fetch<E, T, F>(
    client: &ApiClient,
    endpoint: Endpoint,
    param: Option<RouteParam>,
    extract: F,
) -> Result<Outcome<T>, ApiError>
where
    E: DeserializeOwned,
    F: FnOnce(E) -> T,
{
    let mut options = RequestOptions::get();
    options.params = param;

    Ok(client.send::<E>(endpoint, options).await?.map(extract))
}

/// Send a create, update or delete call with the endpoint's own method.
async fn mutate<B>(
    client: &ApiClient,
    endpoint: Endpoint,
    param: Option<RouteParam>,
    body: Option<&B>,
) -> Result<Outcome<MutationResult>, ApiError>
where
    B: Serialize,
{
    let mut options = RequestOptions::new().method(endpoint.method());
    options.params = param;

    if let Some(body) = body {
        options = options.json(body)?;
    }

    client.send::<MutationResult>(endpoint, options).await
}

/// Body type for calls without a payload.
type NoBody = ();
