//! Services and their query parameters.
//!
//! A [`Service`] addresses one endpoint of a project, optionally a single
//! resource within it, and collects query parameters. [`Service::build`]
//! turns it into a URI relative to the API host:
//!
//! ```text
//! /{project_key}{endpoint}[/{id} | /key={key}][?{query}]
//! ```
//!
//! # Query Parameters
//!
//! | Method | Parameter |
//! |--------|-----------|
//! | `where_` | `where` (repeatable, percent-encoded) |
//! | `sort` | `sort={field} asc|desc` (repeatable) |
//! | `per_page` | `limit` |
//! | `page` | `offset = per_page * (page - 1)` |
//! | `expand` | `expand` (repeatable) |
//! | `with_total` | `withTotal` |
//! | `staged` | `staged` |

use std::fmt;

use crate::config::ProjectKey;
use crate::rest::RequestBuilderError;

/// Endpoints known to the request builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    /// The project itself.
    Project,
    /// Products.
    Products,
    /// Product projections (current or staged product data).
    ProductProjections,
    /// Categories.
    Categories,
    /// Customers.
    Customers,
    /// Carts.
    Carts,
    /// Orders.
    Orders,
    /// Channels.
    Channels,
    /// Tax categories.
    TaxCategories,
    /// Types for custom fields.
    Types,
    /// Shipping methods.
    ShippingMethods,
    /// Zones.
    Zones,
    /// Inventory entries.
    Inventory,
    /// Custom objects.
    CustomObjects,
    /// The GraphQL endpoint.
    Graphql,
}

impl ServiceKind {
    /// Returns the endpoint path below the project key.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Project => "",
            Self::Products => "/products",
            Self::ProductProjections => "/product-projections",
            Self::Categories => "/categories",
            Self::Customers => "/customers",
            Self::Carts => "/carts",
            Self::Orders => "/orders",
            Self::Channels => "/channels",
            Self::TaxCategories => "/tax-categories",
            Self::Types => "/types",
            Self::ShippingMethods => "/shipping-methods",
            Self::Zones => "/zones",
            Self::Inventory => "/inventory",
            Self::CustomObjects => "/custom-objects",
            Self::Graphql => "/graphql",
        }
    }

    /// Returns `true` if single resources of this service can be addressed
    /// by id or key.
    #[must_use]
    pub const fn is_addressable(self) -> bool {
        !matches!(self, Self::Project | Self::Graphql)
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project => f.write_str("project"),
            other => f.write_str(other.endpoint().trim_start_matches('/')),
        }
    }
}

/// A URI under construction for one service.
///
/// Setters never fail; invalid combinations are reported by
/// [`build`](Self::build).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    project_key: ProjectKey,
    kind: ServiceKind,
    id: Option<String>,
    key: Option<String>,
    where_: Vec<String>,
    sort: Vec<(String, bool)>,
    per_page: Option<u32>,
    page: Option<u32>,
    expand: Vec<String>,
    with_total: Option<bool>,
    staged: Option<bool>,
}

impl Service {
    pub(crate) const fn new(project_key: ProjectKey, kind: ServiceKind) -> Self {
        Self {
            project_key,
            kind,
            id: None,
            key: None,
            where_: Vec::new(),
            sort: Vec::new(),
            per_page: None,
            page: None,
            expand: Vec::new(),
            with_total: None,
            staged: None,
        }
    }

    /// Returns the kind of this service.
    #[must_use]
    pub const fn kind(&self) -> ServiceKind {
        self.kind
    }

    /// Addresses a single resource by id.
    #[must_use]
    pub fn by_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Addresses a single resource by key.
    #[must_use]
    pub fn by_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Adds a query predicate, e.g. `masterData(published = true)`.
    #[must_use]
    pub fn where_(mut self, predicate: impl Into<String>) -> Self {
        self.where_.push(predicate.into());
        self
    }

    /// Adds a sort expression on `field`.
    #[must_use]
    pub fn sort(mut self, field: impl AsRef<str>, ascending: bool) -> Self {
        self.sort.push((field.as_ref().to_string(), ascending));
        self
    }

    /// Sets the page size, sent as `limit`.
    #[must_use]
    pub const fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Selects a 1-based page, sent as `offset`.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Adds a reference expansion path.
    #[must_use]
    pub fn expand(mut self, path: impl Into<String>) -> Self {
        self.expand.push(path.into());
        self
    }

    /// Sets whether the total count is computed for query results.
    #[must_use]
    pub const fn with_total(mut self, with_total: bool) -> Self {
        self.with_total = Some(with_total);
        self
    }

    /// Selects staged instead of current data.
    #[must_use]
    pub const fn staged(mut self, staged: bool) -> Self {
        self.staged = Some(staged);
        self
    }

    /// Builds the URI relative to the API host.
    ///
    /// # Errors
    ///
    /// Returns [`RequestBuilderError`] if:
    /// - both `by_id` and `by_key` were set (`IdAndKey`)
    /// - `by_id` or `by_key` was set on the project or GraphQL endpoint (`NotAddressable`)
    /// - an id, key, predicate, sort field or expansion is blank (`EmptyParameter`)
    /// - `per_page` or `page` is zero, or `page` lacks `per_page`
    pub fn build(&self) -> Result<String, RequestBuilderError> {
        self.validate()?;

        let mut uri = format!("/{}{}", self.project_key, self.kind.endpoint());
        if let Some(id) = &self.id {
            uri.push('/');
            uri.push_str(&urlencoding::encode(id));
        } else if let Some(key) = &self.key {
            uri.push_str("/key=");
            uri.push_str(&urlencoding::encode(key));
        }

        let query = self.query_pairs();
        if !query.is_empty() {
            let encoded: Vec<String> = query
                .iter()
                .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
                .collect();
            uri.push('?');
            uri.push_str(&encoded.join("&"));
        }

        Ok(uri)
    }

    fn validate(&self) -> Result<(), RequestBuilderError> {
        if self.id.is_some() && self.key.is_some() {
            return Err(RequestBuilderError::IdAndKey);
        }
        if (self.id.is_some() || self.key.is_some()) && !self.kind.is_addressable() {
            return Err(RequestBuilderError::NotAddressable { service: self.kind });
        }

        let blank = |value: &String| value.trim().is_empty();
        if self.id.as_ref().is_some_and(blank) {
            return Err(RequestBuilderError::EmptyParameter { param: "id" });
        }
        if self.key.as_ref().is_some_and(blank) {
            return Err(RequestBuilderError::EmptyParameter { param: "key" });
        }
        if self.where_.iter().any(blank) {
            return Err(RequestBuilderError::EmptyParameter { param: "where" });
        }
        if self.sort.iter().any(|(field, _)| blank(field)) {
            return Err(RequestBuilderError::EmptyParameter { param: "sort" });
        }
        if self.expand.iter().any(blank) {
            return Err(RequestBuilderError::EmptyParameter { param: "expand" });
        }

        match (self.per_page, self.page) {
            (Some(0), _) => Err(RequestBuilderError::InvalidPerPage { value: 0 }),
            (_, Some(0)) => Err(RequestBuilderError::InvalidPage { value: 0 }),
            (None, Some(_)) => Err(RequestBuilderError::PageWithoutPerPage),
            _ => Ok(()),
        }
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        pairs.extend(self.where_.iter().map(|w| ("where", w.clone())));
        pairs.extend(self.sort.iter().map(|(field, ascending)| {
            let direction = if *ascending { "asc" } else { "desc" };
            ("sort", format!("{field} {direction}"))
        }));
        if let Some(per_page) = self.per_page {
            pairs.push(("limit", per_page.to_string()));
            if let Some(page) = self.page {
                let offset = u64::from(per_page) * u64::from(page - 1);
                pairs.push(("offset", offset.to_string()));
            }
        }
        pairs.extend(self.expand.iter().map(|e| ("expand", e.clone())));
        if let Some(with_total) = self.with_total {
            pairs.push(("withTotal", with_total.to_string()));
        }
        if let Some(staged) = self.staged {
            pairs.push(("staged", staged.to_string()));
        }

        pairs
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ServiceKind>();
    assert_send_sync::<Service>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn service(kind: ServiceKind) -> Service {
        Service::new(ProjectKey::new("test-project").unwrap(), kind)
    }

    #[test]
    fn test_project_service_builds_project_path() {
        assert_eq!(service(ServiceKind::Project).build().unwrap(), "/test-project");
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(
            service(ServiceKind::ProductProjections).build().unwrap(),
            "/test-project/product-projections"
        );
        assert_eq!(
            service(ServiceKind::ShippingMethods).build().unwrap(),
            "/test-project/shipping-methods"
        );
        assert_eq!(
            service(ServiceKind::Graphql).build().unwrap(),
            "/test-project/graphql"
        );
    }

    #[test]
    fn test_by_id_and_by_key() {
        assert_eq!(
            service(ServiceKind::Products).by_id("a1b2").build().unwrap(),
            "/test-project/products/a1b2"
        );
        assert_eq!(
            service(ServiceKind::Categories).by_key("summer sale").build().unwrap(),
            "/test-project/categories/key=summer%20sale"
        );
    }

    #[test]
    fn test_project_and_graphql_are_not_addressable() {
        for kind in [ServiceKind::Project, ServiceKind::Graphql] {
            assert_eq!(
                service(kind).by_id("abc").build(),
                Err(RequestBuilderError::NotAddressable { service: kind })
            );
            assert_eq!(
                service(kind).by_key("abc").build(),
                Err(RequestBuilderError::NotAddressable { service: kind })
            );
        }
        assert!(ServiceKind::Orders.is_addressable());
    }

    #[test]
    fn test_by_id_and_by_key_are_exclusive() {
        let result = service(ServiceKind::Products).by_id("a").by_key("b").build();
        assert_eq!(result, Err(RequestBuilderError::IdAndKey));
    }

    #[test]
    fn test_where_is_percent_encoded_and_repeatable() {
        let uri = service(ServiceKind::Customers)
            .where_(r#"email = "a@example.com""#)
            .where_("isEmailVerified = true")
            .build()
            .unwrap();

        assert_eq!(
            uri,
            "/test-project/customers?where=email%20%3D%20%22a%40example.com%22&where=isEmailVerified%20%3D%20true"
        );
    }

    #[test]
    fn test_sort_and_pagination() {
        let uri = service(ServiceKind::Orders)
            .sort("createdAt", false)
            .per_page(20)
            .page(3)
            .build()
            .unwrap();

        assert_eq!(
            uri,
            "/test-project/orders?sort=createdAt%20desc&limit=20&offset=40"
        );
    }

    #[test]
    fn test_expand_with_total_and_staged() {
        let uri = service(ServiceKind::ProductProjections)
            .by_key("shirt")
            .expand("productType")
            .with_total(false)
            .staged(true)
            .build()
            .unwrap();

        assert_eq!(
            uri,
            "/test-project/product-projections/key=shirt?expand=productType&withTotal=false&staged=true"
        );
    }

    #[test]
    fn test_pagination_validation() {
        assert_eq!(
            service(ServiceKind::Carts).page(2).build(),
            Err(RequestBuilderError::PageWithoutPerPage)
        );
        assert_eq!(
            service(ServiceKind::Carts).per_page(0).build(),
            Err(RequestBuilderError::InvalidPerPage { value: 0 })
        );
        assert_eq!(
            service(ServiceKind::Carts).per_page(10).page(0).build(),
            Err(RequestBuilderError::InvalidPage { value: 0 })
        );
        assert_eq!(
            service(ServiceKind::Carts).per_page(10).build().unwrap(),
            "/test-project/carts?limit=10"
        );
    }

    #[test]
    fn test_blank_parameters_are_rejected() {
        assert_eq!(
            service(ServiceKind::Zones).by_id("  ").build(),
            Err(RequestBuilderError::EmptyParameter { param: "id" })
        );
        assert_eq!(
            service(ServiceKind::Zones).where_("").build(),
            Err(RequestBuilderError::EmptyParameter { param: "where" })
        );
        assert_eq!(
            service(ServiceKind::Zones).sort("", true).build(),
            Err(RequestBuilderError::EmptyParameter { param: "sort" })
        );
    }

    #[test]
    fn test_service_kind_display() {
        assert_eq!(ServiceKind::Project.to_string(), "project");
        assert_eq!(ServiceKind::TaxCategories.to_string(), "tax-categories");
    }
}
