use crate::{
    error::Error,
    http::{ApiClient, Endpoint, Outcome, RequestOptions},
    model::frete::{CalculoFreteRequest, CalculoFreteResponse},
};

/// Quote a shipment against every price table serving the destination.
///
/// # Errors
/// - [`Error::ValidationError`] - No CEP, or neither weight nor cubage; nothing is sent
/// - [`Error::ApiError`] - Unknown CEP or no zone serving it, among other server failures
pub async fn calcular(
    client: &ApiClient,
    request: &CalculoFreteRequest,
) -> Result<Outcome<CalculoFreteResponse>, Error> {
    request.validate()?;

    let options = RequestOptions::new()
        .method(Endpoint::CalcularFrete.method())
        .json(request)?;

    Ok(client
        .send::<CalculoFreteResponse>(Endpoint::CalcularFrete, options)
        .await?)
}
