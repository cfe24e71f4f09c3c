use super::types::*;
use crate::{
    Error, Result,
    config::{Config, InvocationParameters},
};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use tracing::debug;

#[async_trait]
pub trait InferenceEndpoint: Send + Sync {
    async fn generate(&self, messages: Value) -> Result<String>;
}

/// Client for a SageMaker runtime endpoint speaking the chat-completions
/// response shape. Built once at cold start and reused across invocations.
pub struct SageMakerClient {
    http: reqwest::Client,
    invoke_url: String,
    params: InvocationParameters,
}

impl SageMakerClient {
    pub fn new(config: &Config) -> Self {
        let invoke_url = format!(
            "{}/endpoints/{}/invocations",
            config.endpoint.base_url.trim_end_matches('/'),
            config.endpoint.name
        );

        Self {
            http: reqwest::Client::new(),
            invoke_url,
            params: config.invocation.clone(),
        }
    }
}

#[async_trait]
impl InferenceEndpoint for SageMakerClient {
    async fn generate(&self, messages: Value) -> Result<String> {
        let payload = EndpointPayload::new(&self.params, messages);

        let response = self
            .http
            .post(&self.invoke_url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: EndpointResponse = serde_json::from_str(&body)
            .map_err(|e| Error::malformed_response(e.to_string()))?;

        let choice = parsed
            .choices
            .first()
            .ok_or_else(|| Error::malformed_response("'choices' is empty"))?;

        debug!("Generated text: {}", choice.message.content);

        Ok(choice.message.content.clone())
    }
}
