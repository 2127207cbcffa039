use poem::error::ParseJsonError;
use poem::http::header;
use poem::web::Json;
use poem::{FromRequest, Request, RequestBody, Result};
use serde::de::DeserializeOwned;

/// JSON request body.
///
/// Unlike [`Json`], a request without `Content-Type` is still parsed as JSON.
/// A request with any other content type is rejected the same way [`Json`] rejects it.
pub struct JsonBody<T>(pub T);

#[poem::async_trait]
impl<'a, T: DeserializeOwned + Send> FromRequest<'a> for JsonBody<T> {
    async fn from_request(request: &'a Request, body: &mut RequestBody) -> Result<Self> {
        if request.headers().contains_key(header::CONTENT_TYPE) {
            let Json(value) = Json::<T>::from_request(request, body).await?;
            return Ok(Self(value));
        }
        let bytes = body.take()?.into_vec().await?;
        let value = serde_json::from_slice(&bytes).map_err(ParseJsonError::Parse)?;
        Ok(Self(value))
    }
}
