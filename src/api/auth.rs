use dioxus_logger::tracing;
use serde_json::json;

use crate::{
    error::ApiError,
    http::{ApiClient, Endpoint, Outcome, RequestOptions},
    model::user::{LoginRequest, LoginResponse},
};

/// Log in and store the issued CSRF token and user in the session.
///
/// # Errors
/// - `Application` - Invalid credentials; the message is the server's
/// - Any other [`ApiError`] from the contract layer
pub async fn login(
    client: &ApiClient,
    request: &LoginRequest,
) -> Result<Outcome<LoginResponse>, ApiError> {
    let options = RequestOptions::new()
        .method(Endpoint::Login.method())
        .json(request)?;

    let outcome = client.send::<LoginResponse>(Endpoint::Login, options).await?;

    if let Outcome::Success(response) = &outcome {
        if !response.success {
            return Err(ApiError::application(200, Some(response.rejection_message())));
        }

        if let Some(token) = &response.csrf_token {
            client.session().set_token(token.clone());
        }
        client.session().set_current_user(response.user.clone());

        tracing::info!(username = %request.username, "Logged in");
    }

    Ok(outcome)
}

/// Log out on the server and forget the local session.
///
/// The local session is cleared even when the server call fails.
pub async fn logout(client: &ApiClient) -> Result<Outcome<()>, ApiError> {
    let result = client
        .send_json(Endpoint::Logout, RequestOptions::post(json!({})))
        .await;

    client.session().clear();

    Ok(result?.map(|_| ()))
}
