//! GraphQL client implementation for the commercetools API.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::clients::graphql::GraphqlError;
use crate::clients::{Client, ClientRequest, ClientResponse, HttpMethod};
use crate::config::ProjectKey;

/// GraphQL API client for a single commercetools project.
///
/// Queries are POSTed as `{"query": ..., "variables": ...}` to
/// `/{project_key}/graphql` through the shared [`Client`], so they use the
/// same token cache and transport settings as REST requests.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use commercetools_sdk::{GraphqlClient, ProjectKey};
/// use std::sync::Arc;
///
/// let graphql = GraphqlClient::new(Arc::new(client), ProjectKey::new("my-project")?);
/// let response = graphql.query("{ project { name } }", None).await?;
/// println!("{}", response.body["data"]["project"]["name"]);
/// ```
#[derive(Clone, Debug)]
pub struct GraphqlClient {
    client: Arc<Client>,
    project_key: ProjectKey,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a GraphQL client for `project_key` on top of `client`.
    #[must_use]
    pub const fn new(client: Arc<Client>, project_key: ProjectKey) -> Self {
        Self {
            client,
            project_key,
        }
    }

    /// Returns the project this client queries.
    #[must_use]
    pub const fn project_key(&self) -> &ProjectKey {
        &self.project_key
    }

    /// Returns the GraphQL endpoint path, relative to the API host.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("/{}/graphql", self.project_key)
    }

    /// Executes a GraphQL query.
    ///
    /// `variables` is sent as-is; `None` omits the field.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] for token, network or non-2xx failures.
    /// GraphQL errors reported with HTTP 200 are not errors here; see
    /// [`errors`](Self::errors).
    pub async fn query(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<ClientResponse, GraphqlError> {
        let mut body = json!({ "query": query });
        if let Some(variables) = variables {
            body["variables"] = variables;
        }

        let request = ClientRequest::builder(HttpMethod::Post, self.endpoint())
            .body(body)
            .build()
            .map_err(crate::clients::HttpError::from)?;

        tracing::debug!("Executing GraphQL query against {}", self.endpoint());
        Ok(self.client.execute(request).await?)
    }

    /// Returns the GraphQL `errors` reported in a response body, if any.
    #[must_use]
    pub fn errors(response: &ClientResponse) -> Option<&Vec<Value>> {
        response
            .body
            .get("errors")
            .and_then(Value::as_array)
            .filter(|errors| !errors.is_empty())
    }
}
