use inference_bridge::{config, endpoint::SageMakerClient, handler};
use lambda_runtime::{LambdaEvent, run, service_fn};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .json()
        .init();

    // Load configuration once at cold start
    let config = match config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Starting inference bridge for endpoint '{}' with model '{}'",
        config.endpoint.name, config.invocation.model
    );

    // One client per process, shared across invocations
    let client = Arc::new(SageMakerClient::new(&config));

    run(service_fn(move |event: LambdaEvent<Value>| {
        let client = Arc::clone(&client);
        async move {
            Ok::<_, lambda_runtime::Error>(handler::handle(event.payload, client.as_ref()).await)
        }
    }))
    .await
}
