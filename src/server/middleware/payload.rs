//! JSON body extractor.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::server::error::{client::ClientError, AppError};

/// JSON request body.
///
/// An empty body yields `T::default()`, so routes whose checks all fail on
/// missing fields report those checks instead of a parse error. A body that
/// is not valid JSON for `T` is `BodyInvalid`.
#[derive(Debug)]
pub struct Payload<T>(pub T);

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ClientError::BodyInvalid)?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Payload(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(Payload)
            .map_err(|_| ClientError::BodyInvalid.into())
    }
}
