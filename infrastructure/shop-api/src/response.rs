use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use business::domain::errors::RemoteError;

/// Sends the request and turns non-success statuses into `RemoteError::Status`,
/// keeping the error body for callers that inspect it.
pub(crate) async fn send(request: RequestBuilder) -> Result<Response, RemoteError> {
    let response = request
        .send()
        .await
        .map_err(|e| RemoteError::transport(e.to_string()))?;

    let status = response.status();
    tracing::debug!(url = %response.url(), status = status.as_u16(), "shop api response");

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.ok().filter(|body| !body.is_empty());
    Err(RemoteError::Status {
        code: status.as_u16(),
        body,
    })
}

/// Reads a JSON body; an empty body or a literal `null` is `RemoteError::EmptyBody`.
pub(crate) async fn json_body<T: DeserializeOwned>(response: Response) -> Result<T, RemoteError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| RemoteError::transport(e.to_string()))?;
    parse_json(&bytes)
}

pub(crate) fn parse_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, RemoteError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(RemoteError::EmptyBody);
    }

    serde_json::from_slice::<Option<T>>(bytes)
        .map_err(|e| RemoteError::malformed(e.to_string()))?
        .ok_or(RemoteError::EmptyBody)
}
