//! Scheduled entry point: one sync per invocation.
//!
//! The event payload is ignored and nothing is returned. Failures are logged
//! and terminate the process, which the platform reports as a failed run.

use discover_sync::{cli, config::SyncConfig, error};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;

async fn handler(_event: LambdaEvent<Value>) -> Result<(), Error> {
    let cfg = match SyncConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => error!("{}", e),
    };

    if let Err(e) = cli::sync(&cfg).await {
        error!("{}", e);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handler)).await
}
