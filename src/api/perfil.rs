use serde::Deserialize;

use crate::{
    api::mutate,
    error::{ApiError, Error},
    http::{ApiClient, Endpoint, Outcome, RequestOptions},
    model::{
        api::MutationResult,
        user::{PerfilForm, UserDto},
    },
};

#[derive(Deserialize)]
struct PerfilResponse {
    #[serde(flatten)]
    user: UserDto,
    #[serde(default)]
    csrf_token: Option<String>,
}

/// Fetch the authenticated user and remember it in the session, along with a fresh CSRF
/// token when the backend sends one.
pub async fn get(client: &ApiClient) -> Result<Outcome<UserDto>, ApiError> {
    let outcome = client
        .send::<PerfilResponse>(Endpoint::GetPerfil, RequestOptions::get())
        .await?;

    Ok(outcome.map(|response| {
        if let Some(token) = response.csrf_token {
            client.session().set_token(token);
        }
        client.session().set_current_user(Some(response.user.clone()));

        response.user
    }))
}

/// Validate the profile form and submit it.
///
/// # Errors
/// - [`Error::ValidationError`] - The password fields are incomplete or do not match; nothing
///   is sent
/// - [`Error::ApiError`] - The server rejected the update (e.g. wrong current password)
pub async fn update(client: &ApiClient, form: PerfilForm) -> Result<Outcome<MutationResult>, Error> {
    let update = form.into_update()?;

    Ok(mutate(client, Endpoint::UpdatePerfil, None, Some(&update)).await?)
}
