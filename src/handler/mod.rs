mod types;

pub use types::*;

use crate::{Error, Result, endpoint::InferenceEndpoint};
use serde_json::Value;
use tracing::{error, info};

/// Extract the `messages` value from the incoming event.
pub fn validate_event(event: &Value) -> Result<Value> {
    event
        .get("messages")
        .cloned()
        .ok_or_else(|| Error::validation("Missing 'messages' in the event payload."))
}

async fn bridge(event: &Value, endpoint: &dyn InferenceEndpoint) -> Result<String> {
    let messages = validate_event(event)?;
    let text = endpoint.generate(messages).await?;
    Ok(serde_json::to_string(&text)?)
}

/// Entry point for one invocation: validate, invoke the endpoint, and map
/// the outcome to a runtime result. Every failure, whatever its kind, is
/// caught here and becomes a 400 result; nothing propagates to the runtime.
pub async fn handle(event: Value, endpoint: &dyn InferenceEndpoint) -> HandlerResult {
    info!("Received event: {}", event);

    match bridge(&event, endpoint).await {
        Ok(body) => HandlerResult::ok(body),
        Err(err) => {
            error!("Invocation failed: {}", err);
            HandlerResult::failed(&err)
        }
    }
}
