use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::common::ApiError;

/// Reject non-2xx responses, keeping whatever error text the server sent.
pub(crate) async fn ok_or_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response
            .text()
            .await
            .ok()
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}
