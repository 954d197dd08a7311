use async_trait::async_trait;
use reqwest::multipart::Form;
use serde_json::Value;
use synthgen_core::{GenerationRequest, ResultSet};

use crate::GenerationClient;
use crate::errors::GenerationError;

/// Endpoint the generation service listens on by default.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/";

/// Longest slice of an error body kept in `GenerationError::Status`.
const MAX_ERROR_BODY: usize = 512;

/// Posts the request as `multipart/form-data` and parses the JSON rows.
///
/// One attempt per call: no retry, no backoff, no client-side timeout.
#[derive(Debug, Clone)]
pub struct HttpGenerationClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGenerationClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpGenerationClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl GenerationClient for HttpGenerationClient {
    async fn submit(&self, request: &GenerationRequest) -> Result<ResultSet, GenerationError> {
        let form = request
            .form_fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: text.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        tracing::debug!(
            event = "response_received",
            status = status.as_u16(),
            bytes = body.len()
        );
        parse_rows(&body)
    }
}

/// Parses a response body that must be a JSON array of objects.
pub fn parse_rows(body: &[u8]) -> Result<ResultSet, GenerationError> {
    let value: Value = serde_json::from_slice(body)?;
    if !value.is_array() {
        return Err(GenerationError::NotAList(json_kind(&value)));
    }
    Ok(serde_json::from_value(value)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
