use std::time::Duration;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    data::models::generate_content_model::{GenerateContentRequest, GenerateContentResponse},
    errors::{AdviceInvalidResponse, AdviceNotConfigured, AdviceRequestFailed},
};

#[async_trait]
pub(crate) trait TextGenerationDatasource: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ServerError>;
}

/// Google Gemini `generateContent` over REST.
pub(crate) struct GeminiDatasourceImpl {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiDatasourceImpl {
    pub(crate) fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Option<Duration>,
        api_key: Option<String>,
    ) -> Result<Self, ServerError> {
        let model = model.into();
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AdviceRequestFailed::with_debug(&model, &e))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            model,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl TextGenerationDatasource for GeminiDatasourceImpl {
    async fn generate(&self, prompt: &str) -> Result<String, ServerError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AdviceNotConfigured::new())?;

        debug!(model = %self.model, prompt_len = prompt.len(), "requesting generated text");
        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| AdviceRequestFailed::with_debug(&self.model, &e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdviceRequestFailed::with_debug(
                &self.model,
                &format!("status {}: {}", status, body),
            ));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| AdviceInvalidResponse::with_debug("unexpected body", &e))?
            .into_text()
            .ok_or_else(|| AdviceInvalidResponse::new("no text in the first candidate"))
    }
}
