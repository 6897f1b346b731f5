//! Entry point for building REST request URIs for a project.

use crate::config::ProjectKey;
use crate::rest::{Service, ServiceKind};

/// Builds request URIs for one commercetools project.
///
/// Each method returns a fresh [`Service`] for an endpoint; the builder
/// itself holds no per-request state and can be reused.
///
/// # Example
///
/// ```rust
/// use commercetools_sdk::rest::RequestBuilder;
/// use commercetools_sdk::ProjectKey;
///
/// let builder = RequestBuilder::new(ProjectKey::new("my-project").unwrap());
///
/// assert_eq!(builder.project().build().unwrap(), "/my-project");
/// assert_eq!(
///     builder.products().by_key("shirt").expand("productType").build().unwrap(),
///     "/my-project/products/key=shirt?expand=productType"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBuilder {
    project_key: ProjectKey,
}

impl RequestBuilder {
    /// Creates a request builder for `project_key`.
    #[must_use]
    pub const fn new(project_key: ProjectKey) -> Self {
        Self { project_key }
    }

    /// Returns the project key URIs are built for.
    #[must_use]
    pub const fn project_key(&self) -> &ProjectKey {
        &self.project_key
    }

    /// Returns a service for `kind`.
    #[must_use]
    pub fn service(&self, kind: ServiceKind) -> Service {
        Service::new(self.project_key.clone(), kind)
    }

    /// The project itself: `/{project_key}`.
    #[must_use]
    pub fn project(&self) -> Service {
        self.service(ServiceKind::Project)
    }

    /// `/{project_key}/products`
    #[must_use]
    pub fn products(&self) -> Service {
        self.service(ServiceKind::Products)
    }

    /// `/{project_key}/product-projections`
    #[must_use]
    pub fn product_projections(&self) -> Service {
        self.service(ServiceKind::ProductProjections)
    }

    /// `/{project_key}/categories`
    #[must_use]
    pub fn categories(&self) -> Service {
        self.service(ServiceKind::Categories)
    }

    /// `/{project_key}/customers`
    #[must_use]
    pub fn customers(&self) -> Service {
        self.service(ServiceKind::Customers)
    }

    /// `/{project_key}/carts`
    #[must_use]
    pub fn carts(&self) -> Service {
        self.service(ServiceKind::Carts)
    }

    /// `/{project_key}/orders`
    #[must_use]
    pub fn orders(&self) -> Service {
        self.service(ServiceKind::Orders)
    }

    /// `/{project_key}/channels`
    #[must_use]
    pub fn channels(&self) -> Service {
        self.service(ServiceKind::Channels)
    }

    /// `/{project_key}/tax-categories`
    #[must_use]
    pub fn tax_categories(&self) -> Service {
        self.service(ServiceKind::TaxCategories)
    }

    /// `/{project_key}/types`
    #[must_use]
    pub fn types(&self) -> Service {
        self.service(ServiceKind::Types)
    }

    /// `/{project_key}/shipping-methods`
    #[must_use]
    pub fn shipping_methods(&self) -> Service {
        self.service(ServiceKind::ShippingMethods)
    }

    /// `/{project_key}/zones`
    #[must_use]
    pub fn zones(&self) -> Service {
        self.service(ServiceKind::Zones)
    }

    /// `/{project_key}/inventory`
    #[must_use]
    pub fn inventory(&self) -> Service {
        self.service(ServiceKind::Inventory)
    }

    /// `/{project_key}/custom-objects`
    #[must_use]
    pub fn custom_objects(&self) -> Service {
        self.service(ServiceKind::CustomObjects)
    }

    /// `/{project_key}/graphql`
    #[must_use]
    pub fn graphql(&self) -> Service {
        self.service(ServiceKind::Graphql)
    }
}
