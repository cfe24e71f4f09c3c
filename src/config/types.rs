use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub endpoint: EndpointConfig,
    pub invocation: InvocationParameters,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// SageMaker endpoint name, interpolated into the invocation URL.
    pub name: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Model identifier plus the fixed sampling settings applied to every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationParameters {
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
}

impl InvocationParameters {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
        }
    }
}

fn default_base_url() -> String {
    "https://runtime.sagemaker.us-east-1.amazonaws.com".to_string()
}

fn default_max_tokens() -> u32 {
    3000
}

fn default_temperature() -> f32 {
    0.5
}

fn default_top_p() -> f32 {
    0.2
}
