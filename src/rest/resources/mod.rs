//! The typed resource tree.
//!
//! Three roots hang off the API base URL, one per API domain:
//!
//! ```text
//! productManagement/                        ProductManagement
//!   categories                              ProductCategories        list
//!   models                                  ProductModels            list
//!   products/search                         ProductSearch            create
//!   product-integration-packages            ProductIntegrationPackages  get, create
//! offerManagement/                          OfferManagement
//!   competing-offer-changes                 CompetingOfferChanges    list
//!   offers                                  Offers                   create
//!     search                                OfferSearch              create
//!   offer-integration-packages              OfferIntegrationPackages get, create
//!   seller-deals/search                     SellerDealsSearch        create
//! OrderManagement/orders/                   OrderManagement
//!   search                                  OrderSearch              create
//!   {order}/commercial-gestures             CommercialGestures       create, list
//!   {order}/commercial-gesture-eligibilities  CommercialGestureEligibilities  list
//!   {order}/validate                        OrderValidation          update
//! ```
//!
//! Nodes are built on demand by the navigation methods of their parent and
//! inherit the parent's subscription key.
//!
//! # Capabilities
//!
//! A node only has the requests listed above. Commercial gestures can be
//! created and listed:
//!
//! ```no_run
//! use cdiscount_api::rest::resources::OrderManagement;
//! use cdiscount_api::rest::{Creatable, Listable};
//!
//! async fn gestures(orders: &OrderManagement) {
//!     let node = orders.commercial_gestures("X");
//!     let _ = node.fetch_list(None).await;
//!     let _ = node.create_item(&serde_json::json!({"amount": 5})).await;
//! }
//! ```
//!
//! but not fetched one by one:
//!
//! ```compile_fail,E0599
//! use cdiscount_api::rest::resources::OrderManagement;
//! use cdiscount_api::rest::Gettable;
//!
//! async fn gestures(orders: &OrderManagement) {
//!     let _ = orders.commercial_gestures("X").fetch_item("1").await;
//! }
//! ```
//!
//! deleted:
//!
//! ```compile_fail,E0599
//! use cdiscount_api::rest::resources::OrderManagement;
//! use cdiscount_api::rest::Deletable;
//!
//! async fn gestures(orders: &OrderManagement) {
//!     let _ = orders.commercial_gestures("X").delete_item("1").await;
//! }
//! ```
//!
//! or upserted:
//!
//! ```compile_fail,E0599
//! use cdiscount_api::rest::resources::OrderManagement;
//! use cdiscount_api::rest::Updatable;
//!
//! async fn gestures(orders: &OrderManagement) {
//!     let item = serde_json::json!({"id": "1"});
//!     let _ = orders.commercial_gestures("X").update_create_item(&item, None).await;
//! }
//! ```
//!
//! Offers accept new items but cannot be listed:
//!
//! ```compile_fail,E0599
//! use cdiscount_api::rest::resources::OfferManagement;
//! use cdiscount_api::rest::Listable;
//!
//! async fn offers(offers: &OfferManagement) {
//!     let _ = offers.offers().fetch_list(None).await;
//! }
//! ```

use crate::rest::ResourcePool;

/// Declares a node type wrapping a [`ResourcePool`], with its capabilities.
macro_rules! resource_node {
    ($(#[$meta:meta])* $name:ident $(: $($capability:ident),+)?) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name {
            pool: $crate::rest::ResourcePool,
        }

        impl $name {
            pub(crate) const fn new(pool: $crate::rest::ResourcePool) -> Self {
                Self { pool }
            }
        }

        impl $crate::rest::Resource for $name {
            fn pool(&self) -> &$crate::rest::ResourcePool {
                &self.pool
            }
        }

        $($(impl $crate::rest::$capability for $name {})+)?
    };
}

mod offer_management;
mod order_management;
mod product_management;

pub use offer_management::{
    CompetingOfferChanges, OfferIntegrationPackages, OfferManagement, OfferSearch, Offers,
    SellerDealsSearch,
};
pub use order_management::{
    CommercialGestureEligibilities, CommercialGestures, OrderManagement, OrderSearch,
    OrderValidation,
};
pub use product_management::{
    ProductCategories, ProductIntegrationPackages, ProductManagement, ProductModels, ProductSearch,
};

/// Path of the product API root, relative to the base URL.
pub const PRODUCT_MANAGEMENT_PATH: &str = "productManagement";
/// Path of the offer API root, relative to the base URL.
pub const OFFER_MANAGEMENT_PATH: &str = "offerManagement";
/// Path of the order API root, relative to the base URL.
pub const ORDER_MANAGEMENT_PATH: &str = "OrderManagement/orders";

impl ProductManagement {
    /// Builds the product root under `base`.
    #[must_use]
    pub fn from_base(base: &ResourcePool) -> Self {
        Self::new(base.child([PRODUCT_MANAGEMENT_PATH]))
    }
}

impl OfferManagement {
    /// Builds the offer root under `base`.
    #[must_use]
    pub fn from_base(base: &ResourcePool) -> Self {
        Self::new(base.child([OFFER_MANAGEMENT_PATH]))
    }
}

impl OrderManagement {
    /// Builds the order root under `base`.
    #[must_use]
    pub fn from_base(base: &ResourcePool) -> Self {
        Self::new(base.child([ORDER_MANAGEMENT_PATH]))
    }
}
