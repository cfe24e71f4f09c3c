use crate::config::InvocationParameters;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outbound request body for one endpoint invocation. The caller's messages
/// are forwarded verbatim; everything else comes from the fixed parameters.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointPayload {
    pub model: String,
    pub messages: Value,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl EndpointPayload {
    pub fn new(params: &InvocationParameters, messages: Value) -> Self {
        Self {
            model: params.model.clone(),
            messages,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            top_p: params.top_p,
        }
    }
}

/// Reply shape expected from the endpoint. Fields are required so that a
/// response missing any of them fails parsing with the offending path.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}
