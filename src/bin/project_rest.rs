//! Fetches the project through the REST API.
//!
//! Run with: cargo run --bin project_rest
//! Run with debug: RUST_LOG=commercetools_sdk=debug cargo run --bin project_rest
//!
//! Requires `ADMIN_CLIENT_ID`, `ADMIN_CLIENT_SECRET` and `CTP_PROJECT_KEY`,
//! either exported or in a `.env` file. `CTP_REGION`, `CTP_AUTH_URL`,
//! `CTP_API_URL` and `CTP_SCOPES` are optional.

use commercetools_sdk::rest::RequestBuilder;
use commercetools_sdk::{
    AuthMiddleware, AuthMiddlewareOptions, Client, Credentials, HttpMiddleware,
    HttpMiddlewareOptions, ProjectSettings,
};
use tracing_subscriber::EnvFilter;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Getting started with the commercetools REST API");

    if let Err(e) = run().await {
        tracing::error!("Failed to get project information: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), BoxError> {
    let settings = ProjectSettings::from_env()?;

    let mut auth_options = AuthMiddlewareOptions::builder()
        .host(settings.auth_host().clone())
        .project_key(settings.project_key().clone())
        .credentials(Credentials::from_env()?);
    if let Some(scopes) = settings.scopes() {
        auth_options = auth_options.scopes(scopes.clone());
    }
    let auth = AuthMiddleware::new(auth_options.build()?)?;

    let http = HttpMiddleware::new(
        HttpMiddlewareOptions::builder()
            .host(settings.api_host().clone())
            .build()?,
    )?;

    let client = Client::builder().auth(auth).http(http).build()?;

    let uri = RequestBuilder::new(settings.project_key().clone())
        .project()
        .build()?;
    let response = client.get(uri).await?;

    tracing::info!(
        "Project information ---> {}",
        serde_json::to_string_pretty(&response)?
    );
    tracing::info!("Got project information");
    Ok(())
}
