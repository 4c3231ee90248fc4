use crate::models::{PredictionRequest, PredictionResponse, VisualizationRequest};
use reqwest::StatusCode;
use std::{env, time::Duration};
use thiserror::Error;

/// Where the prediction/visualization service normally lives. The env
/// override exists so tests can point the app at a stub.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Chart rendering can take a while server-side; bound it instead of
/// letting the page spin forever.
const VISUALIZE_TIMEOUT: Duration = Duration::from_secs(30);

pub fn resolve_base_url() -> String {
    match env::var("PREDICTOR_URL") {
        Ok(url) => url.trim_end_matches('/').to_string(),
        Err(_) => DEFAULT_BASE_URL.to_string(),
    }
}

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Cannot connect to the prediction service at {base_url}")]
    Unreachable {
        base_url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{message}")]
    Service { status: StatusCode, message: String },
    #[error("Prediction service returned an unusable response: {detail}")]
    MalformedResponse { detail: String },
}

/// One-shot client for the external prediction service. Every call is a
/// single request/response exchange; failures surface immediately and
/// recovery is the user resubmitting.
#[derive(Clone)]
pub struct PredictorClient {
    http: reqwest::Client,
    base_url: String,
}

impl PredictorClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POSTs the form payload to `/predict` and extracts the predicted
    /// activity class from the response.
    pub async fn predict(&self, payload: &PredictionRequest) -> Result<i64, UpstreamError> {
        let response = self
            .http
            .post(format!("{}/predict", self.base_url))
            .json(payload)
            .send()
            .await
            .map_err(|source| self.unreachable(source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.failure_from(status, response.text().await.ok()));
        }

        let body: PredictionResponse =
            response
                .json()
                .await
                .map_err(|err| UpstreamError::MalformedResponse {
                    detail: err.to_string(),
                })?;
        Ok(body.prediction)
    }

    /// POSTs a chart request to `/visualize` and returns the rendered image
    /// bytes. Bounded by a fixed timeout; expiry counts as unreachable.
    pub async fn visualize(&self, payload: &VisualizationRequest) -> Result<Vec<u8>, UpstreamError> {
        let response = self
            .http
            .post(format!("{}/visualize", self.base_url))
            .timeout(VISUALIZE_TIMEOUT)
            .json(payload)
            .send()
            .await
            .map_err(|source| self.unreachable(source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.failure_from(status, response.text().await.ok()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| UpstreamError::MalformedResponse {
                detail: err.to_string(),
            })?;
        if bytes.is_empty() {
            return Err(UpstreamError::MalformedResponse {
                detail: "empty image body".to_string(),
            });
        }
        Ok(bytes.to_vec())
    }

    /// GETs the service's `/health` endpoint; only reachability matters.
    pub async fn health(&self) -> Result<(), UpstreamError> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map_err(|source| self.unreachable(source))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.failure_from(status, None))
        }
    }

    fn unreachable(&self, source: reqwest::Error) -> UpstreamError {
        UpstreamError::Unreachable {
            base_url: self.base_url.clone(),
            source,
        }
    }

    fn failure_from(&self, status: StatusCode, body: Option<String>) -> UpstreamError {
        UpstreamError::Service {
            status,
            message: decode_error_body(status, body.as_deref()),
        }
    }
}

/// The service reports failures as a JSON body with an `error` text field,
/// but that is best-effort only; anything else becomes a status-derived
/// message.
fn decode_error_body(status: StatusCode, body: Option<&str>) -> String {
    body.and_then(|text| serde_json::from_str::<serde_json::Value>(text).ok())
        .and_then(|value| {
            value
                .get("error")
                .and_then(|error| error.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("Prediction service returned HTTP {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_message_is_preferred() {
        let message = decode_error_body(
            StatusCode::BAD_REQUEST,
            Some(r#"{"error": "Column2 is required for bar charts"}"#),
        );
        assert_eq!(message, "Column2 is required for bar charts");
    }

    #[test]
    fn undecodable_body_falls_back_to_status() {
        let message = decode_error_body(StatusCode::INTERNAL_SERVER_ERROR, Some("<html>boom"));
        assert_eq!(
            message,
            "Prediction service returned HTTP 500 Internal Server Error"
        );

        let message = decode_error_body(StatusCode::NOT_FOUND, None);
        assert_eq!(message, "Prediction service returned HTTP 404 Not Found");
    }

    #[test]
    fn base_url_default_is_the_local_service() {
        assert_eq!(DEFAULT_BASE_URL, "http://localhost:5000");
    }
}
