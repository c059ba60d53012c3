use serde::Deserialize;

use crate::{
    api::{fetch, mutate, NoBody},
    error::ApiError,
    http::{ApiClient, Endpoint, Outcome, RouteParam},
    model::{
        api::MutationResult,
        user::{UserDto, UsuarioPayload},
    },
};

#[derive(Deserialize)]
struct ListEnvelope {
    usuarios: Vec<UserDto>,
}

#[derive(Deserialize)]
struct ItemEnvelope {
    usuario: UserDto,
}

pub async fn list(client: &ApiClient) -> Result<Outcome<Vec<UserDto>>, ApiError> {
    fetch(client, Endpoint::GetUsuarios, None, |e: ListEnvelope| e.usuarios).await
}

pub async fn get(client: &ApiClient, id: i64) -> Result<Outcome<UserDto>, ApiError> {
    fetch(
        client,
        Endpoint::GetUsuario,
        Some(RouteParam::from(id)),
        |e: ItemEnvelope| e.usuario,
    )
    .await
}

pub async fn create(
    client: &ApiClient,
    payload: &UsuarioPayload,
) -> Result<Outcome<MutationResult>, ApiError> {
    mutate(client, Endpoint::CreateUsuario, None, Some(payload)).await
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    payload: &UsuarioPayload,
) -> Result<Outcome<MutationResult>, ApiError> {
    mutate(
        client,
        Endpoint::UpdateUsuario,
        Some(RouteParam::from(id)),
        Some(payload),
    )
    .await
}

/// Delete a user. The server refuses to delete the logged-in user.
pub async fn delete(client: &ApiClient, id: i64) -> Result<Outcome<MutationResult>, ApiError> {
    mutate::<NoBody>(client, Endpoint::DeleteUsuario, Some(RouteParam::from(id)), None).await
}
