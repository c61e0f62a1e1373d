use onet_web_services::OnetClient;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting O*NET Web Services client");

    // Get configuration from environment variables
    let username = env::var("ONET_USERNAME").unwrap_or_default();
    let password = env::var("ONET_PASSWORD").unwrap_or_default();
    let base_url = env::var("ONET_BASE_URL").ok();

    if username.is_empty() || password.is_empty() {
        tracing::warn!("ONET_USERNAME or ONET_PASSWORD is not set, requests will not be authenticated");
    }

    let client = OnetClient::with_credentials(username, password)?
        .set_base_url(base_url.as_deref())
        .set_token(None);

    tracing::info!("Fetching job zones from {}", client.base_url());
    let response = client.get_job_zones().await;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
