mod client;
mod types;

pub use client::{InferenceEndpoint, SageMakerClient};
pub use types::*;
