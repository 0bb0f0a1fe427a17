//! Search Adapter Main Entry Point
//!
//! Runs a single search the way a themed site does on page load: the query is
//! queued in the host, the adapter loads the index library, and the queued
//! search runs once the adapter reports ready. Results are printed as JSON.
//!
//! Usage: `search-adapter <query words...>`

use std::env;

use dotenv::dotenv;
use search_adapter::{AdapterSettings, AppError, Dependencies};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging.
///
/// Logs go to stderr so stdout carries only the JSON results.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("search_adapter=info,search_adapter_repository=info"));

    let json_logs = env::var("LOG_FORMAT")
        .map(|f| f.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .pretty()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    info!(
        service_name = "search-adapter",
        service_version = env!("CARGO_PKG_VERSION"),
        json = json_logs,
        "Tracing initialized"
    );
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing();

    let term = env::args().skip(1).collect::<Vec<_>>().join(" ");

    let settings = match AdapterSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e);
        }
    };

    let deps = Dependencies::new(settings).await?;

    // The user typed before the engine was ready.
    deps.host.queue_search(term);

    let status = deps
        .adapter
        .initialize(&deps.settings.base_url, &deps.settings.lang)
        .await;
    info!(status = ?status, "Search adapter initialized");

    let pending = deps.host.wait_for_initial_search().await;
    let results = deps.adapter.search(pending.as_deref(), None).await;

    info!(results = results.len(), "Search finished");
    println!("{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}
