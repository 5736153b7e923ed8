use hello_lambda::handlers::hello::invoke;
use hello_lambda::telemetry::{init_tracing, LogConfig};
use hello_lambda_core::contract::ProxyResponse;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(event: LambdaEvent<Value>) -> Result<ProxyResponse, Error> {
    Ok(invoke(event.payload).await?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let log_config = LogConfig::from_env();
    init_tracing(&log_config)?;
    tracing::debug!(filter = %log_config.env_filter(), "tracing initialised");

    lambda_runtime::run(service_fn(handle_request)).await
}
