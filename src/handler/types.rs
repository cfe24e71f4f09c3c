use crate::Error;
use serde::{Deserialize, Serialize};

/// Result returned to the hosting runtime for every invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerResult {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(rename = "isBase64Encoded")]
    pub is_base64_encoded: bool,
    pub body: String,
}

impl HandlerResult {
    /// 200 result. `body` is the already JSON-encoded generated text.
    pub fn ok(body: String) -> Self {
        Self {
            status_code: 200,
            is_base64_encoded: false,
            body,
        }
    }

    /// 400 result carrying the stringified error.
    pub fn failed(err: &Error) -> Self {
        Self {
            status_code: 400,
            is_base64_encoded: false,
            body: format!("Call Failed {err}"),
        }
    }
}
