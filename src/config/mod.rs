mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

/// Read the bridge configuration from the environment once at process start.
///
/// `HF_MODEL_ID` and `ENDPOINT_NAME` are required. `ENDPOINT_BASE_URL`
/// overrides the regional SageMaker runtime URL derived from `AWS_REGION`.
pub fn from_env() -> Result<Config> {
    let model =
        env::var("HF_MODEL_ID").map_err(|_| Error::config("HF_MODEL_ID is not set"))?;
    let name =
        env::var("ENDPOINT_NAME").map_err(|_| Error::config("ENDPOINT_NAME is not set"))?;

    let base_url = env::var("ENDPOINT_BASE_URL").unwrap_or_else(|_| {
        let region = env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());
        format!("https://runtime.sagemaker.{region}.amazonaws.com")
    });

    debug!("Loaded configuration for endpoint: {}", name);

    Ok(Config {
        endpoint: EndpointConfig { name, base_url },
        invocation: InvocationParameters::new(model),
    })
}
