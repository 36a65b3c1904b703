//! HTTP client utilities for interacting with a herodex service.
//!
//! The client offers two calling modes over one underlying request path:
//!
//! - **Strict** methods (`get`, `post`, `delete`) treat any non-2xx status
//!   as an error, so expected 4xx outcomes propagate to the caller's
//!   error-handling scope like transport failures do.
//! - **Safe** methods (`try_get`, `try_post`, `try_delete`) return
//!   [`ApiOutcome`], capturing a non-2xx status and its body as an
//!   inspectable failure value; only transport-level failures become
//!   errors. Useful when a 404 or 422 is the expected result of a call.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt;

/// Error for transport-level failures, and for non-2xx responses in strict
/// mode.
#[derive(Debug)]
pub struct HttpError {
    message: String,
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for HttpError {}

impl From<reqwest::Error> for HttpError {
    fn from(e: reqwest::Error) -> Self {
        HttpError {
            message: e.to_string(),
        }
    }
}

/// The captured response of a call that completed with a non-2xx status.
#[derive(Debug, Clone)]
pub struct FailureResponse {
    /// The response status code.
    pub status: StatusCode,
    /// The response body, verbatim.
    pub body: String,
}

/// Two-armed result of a safe-mode call: the decoded success value, or the
/// status and body of a non-2xx response.
#[derive(Debug)]
pub enum ApiOutcome<T> {
    /// The call completed 2xx; carries the decoded response body.
    Success(T),
    /// The call completed with a non-2xx status.
    Failure(FailureResponse),
}

impl<T> ApiOutcome<T> {
    /// Returns true for the success arm.
    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success(_))
    }

    /// Unwraps the success value.
    ///
    /// # Panics
    /// Panics if the outcome is a failure.
    pub fn into_success(self) -> T {
        match self {
            ApiOutcome::Success(value) => value,
            ApiOutcome::Failure(failure) => {
                panic!("called into_success() on a failure outcome: {:?}", failure)
            }
        }
    }

    /// Unwraps the failure response.
    ///
    /// # Panics
    /// Panics if the outcome is a success.
    pub fn into_failure(self) -> FailureResponse {
        match self {
            ApiOutcome::Failure(failure) => failure,
            ApiOutcome::Success(_) => panic!("called into_failure() on a success outcome"),
        }
    }
}

/// HTTP client for a herodex service.
pub struct HerodexClient {
    client: Client,
    base_url: String,
}

impl HerodexClient {
    /// Creates a client addressing the service at `base_url`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Constructs a full URL from a path.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.strip_suffix('/').unwrap_or(&self.base_url);
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}/{}", base, path)
    }

    /// Makes a GET request; any non-2xx status is an error.
    pub async fn get<T>(&self, path: &str) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        strict(self.try_get(path).await?)
    }

    /// Makes a POST request with a JSON body; any non-2xx status is an error.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        strict(self.try_post(path, body).await?)
    }

    /// Makes a DELETE request; any non-2xx status is an error.
    pub async fn delete(&self, path: &str) -> Result<(), HttpError> {
        strict(self.try_delete(path).await?)
    }

    /// Makes a GET request, capturing a non-2xx response as a failure value.
    pub async fn try_get<T>(&self, path: &str) -> Result<ApiOutcome<T>, HttpError>
    where
        T: DeserializeOwned,
    {
        let response = self.client.get(self.url(path)).send().await?;
        decoded_outcome(response).await
    }

    /// Makes a POST request with a JSON body, capturing a non-2xx response
    /// as a failure value.
    pub async fn try_post<B, T>(&self, path: &str, body: &B) -> Result<ApiOutcome<T>, HttpError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        decoded_outcome(response).await
    }

    /// Makes a DELETE request, capturing a non-2xx response as a failure
    /// value. The success arm is empty; the contract answers 204.
    pub async fn try_delete(&self, path: &str) -> Result<ApiOutcome<()>, HttpError> {
        let response = self.client.delete(self.url(path)).send().await?;
        if response.status().is_success() {
            Ok(ApiOutcome::Success(()))
        } else {
            Ok(ApiOutcome::Failure(capture_failure(response).await))
        }
    }
}

/// Collapses a safe outcome into the strict calling convention.
fn strict<T>(outcome: ApiOutcome<T>) -> Result<T, HttpError> {
    match outcome {
        ApiOutcome::Success(value) => Ok(value),
        ApiOutcome::Failure(failure) => {
            let detail = if failure.body.is_empty() {
                "No error details".to_string()
            } else {
                failure.body
            };
            Err(HttpError {
                message: format!("{}: {}", failure.status, detail),
            })
        }
    }
}

async fn decoded_outcome<T>(response: Response) -> Result<ApiOutcome<T>, HttpError>
where
    T: DeserializeOwned,
{
    if response.status().is_success() {
        Ok(ApiOutcome::Success(response.json().await?))
    } else {
        Ok(ApiOutcome::Failure(capture_failure(response).await))
    }
}

async fn capture_failure(response: Response) -> FailureResponse {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    FailureResponse { status, body }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let client = HerodexClient::new("http://localhost:8080".to_string());
        assert_eq!(client.url("/powers"), "http://localhost:8080/powers");
        assert_eq!(client.url("powers"), "http://localhost:8080/powers");

        let trailing = HerodexClient::new("http://localhost:8080/".to_string());
        assert_eq!(trailing.url("/heroes"), "http://localhost:8080/heroes");
    }

    #[test]
    fn outcome_accessors() {
        let success: ApiOutcome<u32> = ApiOutcome::Success(42);
        assert!(success.is_success());
        assert_eq!(success.into_success(), 42);

        let failure: ApiOutcome<u32> = ApiOutcome::Failure(FailureResponse {
            status: StatusCode::NOT_FOUND,
            body: "resource not found".to_string(),
        });
        assert!(!failure.is_success());
        let captured = failure.into_failure();
        assert_eq!(captured.status, StatusCode::NOT_FOUND);
        assert_eq!(captured.body, "resource not found");
    }

    #[test]
    #[should_panic(expected = "into_success")]
    fn into_success_panics_on_failure() {
        let failure: ApiOutcome<u32> = ApiOutcome::Failure(FailureResponse {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: String::new(),
        });
        failure.into_success();
    }

    #[test]
    fn strict_mode_folds_failures_into_errors() {
        let failure: ApiOutcome<u32> = ApiOutcome::Failure(FailureResponse {
            status: StatusCode::NOT_FOUND,
            body: "resource not found".to_string(),
        });
        let err = strict(failure).unwrap_err();
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("resource not found"));
    }
}
