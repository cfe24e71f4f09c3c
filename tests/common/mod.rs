use inference_bridge::config::{Config, EndpointConfig, InvocationParameters};
use serde_json::json;
use wiremock::{Mock, MockServer, ResponseTemplate, matchers};

pub const INVOKE_PATH: &str = "/endpoints/test-endpoint/invocations";

pub fn create_test_config(base_url: &str) -> Config {
    Config {
        endpoint: EndpointConfig {
            name: "test-endpoint".to_string(),
            base_url: base_url.to_string(),
        },
        invocation: InvocationParameters::new("test-model"),
    }
}

/// Stub the endpoint to answer every invocation with the given text.
pub async fn mount_chat_response(server: &MockServer, content: &str) {
    Mock::given(matchers::method("POST"))
        .and(matchers::path(INVOKE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })))
        .mount(server)
        .await;
}
