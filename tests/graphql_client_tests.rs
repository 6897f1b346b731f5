//! Integration tests for the GraphQL client.
//!
//! These tests run the full flow: token request, then a GraphQL POST with
//! the bearer token to the project's GraphQL endpoint.

use std::sync::Arc;

use commercetools_sdk::{
    AuthMiddleware, AuthMiddlewareOptions, Client, ClientId, ClientSecret, Credentials,
    GraphqlClient, GraphqlError, HostUrl, HttpError, HttpMiddleware, HttpMiddlewareOptions,
    ProjectKey,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROJECT_QUERY: &str = "query { project { name } }";

async fn mount_token_endpoint(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "gql-token",
            "token_type": "Bearer",
            "expires_in": 172_800,
            "scope": "manage_project:test-project"
        })))
        .mount(server)
        .await;
}

fn create_graphql_client(server: &MockServer) -> GraphqlClient {
    let host = HostUrl::new(server.uri()).unwrap();
    let project_key = ProjectKey::new("test-project").unwrap();

    let auth = AuthMiddleware::new(
        AuthMiddlewareOptions::builder()
            .host(host.clone())
            .project_key(project_key.clone())
            .credentials(Credentials::new(
                ClientId::new("test-client").unwrap(),
                ClientSecret::new("test-secret").unwrap(),
            ))
            .build()
            .unwrap(),
    )
    .unwrap();
    let http = HttpMiddleware::new(HttpMiddlewareOptions::builder().host(host).build().unwrap())
        .unwrap();
    let client = Client::builder().auth(auth).http(http).build().unwrap();

    GraphqlClient::new(Arc::new(client), project_key)
}

#[tokio::test]
async fn test_project_name_query() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;
    Mock::given(method("POST"))
        .and(path("/test-project/graphql"))
        .and(header("authorization", "Bearer gql-token"))
        .and(body_json(json!({"query": PROJECT_QUERY, "variables": {}})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"project": {"name": "Test Project"}}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let graphql = create_graphql_client(&server);
    let response = graphql.query(PROJECT_QUERY, Some(json!({}))).await.unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body["data"]["project"]["name"], "Test Project");
    assert!(GraphqlClient::errors(&response).is_none());
}

#[tokio::test]
async fn test_client_can_be_shared_between_graphql_clients() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;
    Mock::given(method("POST"))
        .and(path("/test-project/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(2)
        .mount(&server)
        .await;

    let graphql = create_graphql_client(&server);
    let other = graphql.clone();

    graphql.query(PROJECT_QUERY, None).await.unwrap();
    other.query(PROJECT_QUERY, None).await.unwrap();
}

#[tokio::test]
async fn test_http_error_is_wrapped() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;
    Mock::given(method("POST"))
        .and(path("/test-project/graphql"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "statusCode": 400,
            "message": "Request body does not contain valid JSON.",
            "errors": [{"code": "InvalidJsonInput"}]
        })))
        .mount(&server)
        .await;

    let graphql = create_graphql_client(&server);
    let result = graphql.query("{", None).await;

    match result {
        Err(GraphqlError::Http(HttpError::Response(e))) => {
            assert_eq!(e.code, 400);
            assert_eq!(e.error_codes, vec!["InvalidJsonInput".to_string()]);
        }
        other => panic!("Expected wrapped Response error, got: {other:?}"),
    }
}
