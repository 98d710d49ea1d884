//! Product API branch (`productManagement`).

resource_node!(
    /// Root of the product API.
    ProductManagement
);

resource_node!(
    /// Category tree available to the seller (`categories`).
    ProductCategories: Listable
);

resource_node!(
    /// Product models and their attributes (`models`).
    ProductModels: Listable
);

resource_node!(
    /// Catalogue product search (`products/search`). Criteria are POSTed.
    ProductSearch: Creatable
);

resource_node!(
    /// Product integration packages (`product-integration-packages`).
    ProductIntegrationPackages: Gettable, Creatable
);

impl ProductManagement {
    /// Returns the `categories` node.
    #[must_use]
    pub fn categories(&self) -> ProductCategories {
        ProductCategories::new(self.pool.child(["categories"]))
    }

    /// Returns the `models` node.
    #[must_use]
    pub fn models(&self) -> ProductModels {
        ProductModels::new(self.pool.child(["models"]))
    }

    /// Returns the `products/search` node.
    #[must_use]
    pub fn search_products(&self) -> ProductSearch {
        ProductSearch::new(self.pool.child(["products/search"]))
    }

    /// Returns the `product-integration-packages` node.
    #[must_use]
    pub fn product_integration_packages(&self) -> ProductIntegrationPackages {
        ProductIntegrationPackages::new(self.pool.child(["product-integration-packages"]))
    }
}
