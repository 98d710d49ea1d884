//! REST resource infrastructure for the Cdiscount seller API.
//!
//! The API is modelled as a tree of resource nodes. Each node wraps a
//! [`ResourcePool`], an endpoint URL bound to the shared HTTP client, and
//! opts into the kinds of requests its endpoint accepts:
//!
//! - **[`Resource`]**: The base trait every node implements
//! - **Capabilities**: [`Creatable`], [`Gettable`], [`Listable`],
//!   [`Searchable`], [`Updatable`] and [`Deletable`]
//! - **[`urljoin`]**: Endpoint composition with exactly one `/` between parts
//! - **[`resources`]**: The typed node tree for the product, offer and order APIs
//!
//! # Example
//!
//! ```rust,ignore
//! use cdiscount_api::rest::{Creatable, Listable, Resource};
//!
//! let orders = client.order_management();
//! let gestures = orders.commercial_gestures("ORDER123");
//! println!("{}", gestures.endpoint());
//!
//! let response = gestures.fetch_list(None).await?;
//! if response.is_ok() {
//!     let body: serde_json::Value = response.json()?;
//! }
//! ```
//!
//! Capabilities are checked at compile time: calling `fetch_item` on a node
//! that is not [`Gettable`] does not build. See [`resources`] for examples.

mod capabilities;
mod pool;
pub mod resources;
mod url;

pub use capabilities::{Creatable, Deletable, Gettable, Listable, Searchable, Updatable};
pub use pool::{Resource, ResourcePool};
pub use url::urljoin;
