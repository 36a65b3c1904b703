//! Strict JSON decoding for request bodies and path identifiers.
//!
//! The registry's contract reserves 422 for duplicate-create conflicts, so
//! malformed bodies must answer 400. Axum's stock `Json` extractor rejects
//! malformed-but-syntactically-valid JSON with 422, which is why bodies are
//! decoded here instead: `Decoded<T>` reads the raw bytes and runs them
//! through serde, turning any failure into a 400 with the decode detail.
//! The resource models carry `deny_unknown_fields`, so extra fields are
//! decode failures too.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::ops::RegistryError;

/// Extractor that strictly decodes the request body into `T`.
///
/// Rejection is a 400 response whose body enumerates what serde found
/// wrong (missing field, wrong type, unknown field, bad UUID format).
#[derive(Debug)]
pub struct Decoded<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Decoded<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = (StatusCode, String);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                "failed to read request body".to_string(),
            )
        })?;

        let value = serde_json::from_slice::<T>(&bytes)
            .map_err(|e| (StatusCode::BAD_REQUEST, format!("invalid body: {}", e)))?;

        Ok(Decoded(value))
    }
}

/// Parses a path segment as a resource identifier.
///
/// Identifier format is a validator concern, so an unparseable id is an
/// `Invalid` outcome (400), not a `NotFound`.
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, RegistryError> {
    Uuid::parse_str(raw)
        .map_err(|e| RegistryError::Invalid(format!("invalid resource id {:?}: {}", raw, e)))
}
