use hello_lambda_core::contract::{EnvelopeError, ProxyResponse};
use hello_lambda_core::greeting::greeting_response;
use serde_json::Value;

/// Answers one invocation. The event is accepted as-is and never read.
pub async fn invoke(_event: Value) -> Result<ProxyResponse, EnvelopeError> {
    greeting_response()
}
