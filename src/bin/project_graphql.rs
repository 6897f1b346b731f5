//! Fetches the project name through the GraphQL API.
//!
//! Run with: cargo run --bin project_graphql
//! Run with debug: RUST_LOG=commercetools_sdk=debug cargo run --bin project_graphql
//!
//! Requires `ADMIN_CLIENT_ID`, `ADMIN_CLIENT_SECRET` and `CTP_PROJECT_KEY`,
//! either exported or in a `.env` file. `CTP_REGION`, `CTP_AUTH_URL`,
//! `CTP_API_URL` and `CTP_SCOPES` are optional.

use std::sync::Arc;

use commercetools_sdk::{
    AuthMiddleware, AuthMiddlewareOptions, Client, Credentials, GraphqlClient, HttpMiddleware,
    HttpMiddlewareOptions, ProjectSettings,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const PROJECT_QUERY: &str = r"
query {
    project {
        name
    }
}
";

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Getting started with the commercetools GraphQL API");

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
    let graphql = GraphqlClient::new(Arc::new(client), settings.project_key().clone());

    let response = graphql.query(PROJECT_QUERY, Some(json!({}))).await?;

    if let Some(errors) = GraphqlClient::errors(&response) {
        tracing::warn!("GraphQL query reported {} error(s)", errors.len());
    }
    tracing::info!(
        "Project information ---> {}",
        serde_json::to_string_pretty(&response)?
    );
    Ok(())
}
