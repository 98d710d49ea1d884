//! Capability traits for resource nodes.
//!
//! Each trait adds one kind of request to a [`Resource`]. A node opts into a
//! capability with an empty `impl`; the request logic lives in the provided
//! methods and targets the node's endpoint:
//!
//! | Trait | Method | Request |
//! |-------|--------|---------|
//! | [`Creatable`] | `create_item` | `POST {endpoint}` with a JSON body |
//! | [`Creatable`] | `create_item_with_files` | `POST {endpoint}` as multipart |
//! | [`Gettable`] | `fetch_item` | `GET {endpoint}/{code}` |
//! | [`Listable`] | `fetch_list` | `GET {endpoint}?{args}` |
//! | [`Searchable`] | `search` | `GET {endpoint}?query={query}` |
//! | [`Updatable`] | `update_create_item` | `PUT {endpoint}/{id}` with a JSON body |
//! | [`Deletable`] | `delete_item` | `DELETE {endpoint}/{code}` |
//!
//! Every method returns the raw [`HttpResponse`]. Non-2xx statuses are not
//! errors; callers inspect [`HttpResponse::code`] themselves.
//!
//! A blank `code` or id is rejected with
//! [`InvalidHttpRequestError::MissingResourceId`] before anything is sent.
//! Joined onto the endpoint it would otherwise address the collection itself.
//!
//! # Example
//!
//! ```rust,ignore
//! use cdiscount_api::rest::{Creatable, Listable};
//!
//! let categories = client.product_management().categories();
//! let response = categories.fetch_list(None).await?;
//!
//! let search = client.product_management().search_products();
//! let response = search
//!     .create_item(&serde_json::json!({"filters": {"gtins": ["3760123456789"]}}))
//!     .await?;
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::clients::{
    FilePart, HttpError, HttpMethod, HttpResponse, InvalidHttpRequestError, QueryParams,
    RequestBody,
};
use crate::rest::{urljoin, Resource};

/// Resources accepting new items with `POST`.
#[allow(async_fn_in_trait)]
pub trait Creatable: Resource {
    /// Sends `item` as a JSON body to the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialization`] if `item` cannot be serialized,
    /// or [`HttpError::Network`] if the request fails in transit.
    async fn create_item<T: Serialize + ?Sized>(&self, item: &T) -> Result<HttpResponse, HttpError> {
        let body = serde_json::to_value(item)?;
        let pool = self.pool();
        pool.send(
            pool.request(HttpMethod::Post, pool.endpoint())
                .body(RequestBody::Json(body)),
        )
        .await
    }

    /// Sends `item` with attached files as `multipart/form-data`.
    ///
    /// The fields of `item` become text form fields. The default `Accept`
    /// and `Content-Type` headers are left off this request so the
    /// multipart boundary is set by the transport. With no files this is
    /// the same as [`Creatable::create_item`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if `item` is not a JSON object,
    /// plus the errors of [`Creatable::create_item`].
    async fn create_item_with_files<T: Serialize + ?Sized>(
        &self,
        item: &T,
        files: Vec<FilePart>,
    ) -> Result<HttpResponse, HttpError> {
        if files.is_empty() {
            return self.create_item(item).await;
        }

        let body = RequestBody::multipart_from_json(serde_json::to_value(item)?, files)?;
        let pool = self.pool();
        pool.send(pool.request(HttpMethod::Post, pool.endpoint()).body(body))
            .await
    }
}

/// Resources exposing single items by code.
#[allow(async_fn_in_trait)]
pub trait Gettable: Resource {
    /// Fetches the item at `{endpoint}/{code}`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingResourceId`] if `code` is
    /// blank, or [`HttpError::Network`] if the request fails in transit.
    async fn fetch_item(&self, code: &str) -> Result<HttpResponse, HttpError> {
        let code = resource_code(code)?;
        let pool = self.pool();
        pool.send(pool.request(HttpMethod::Get, urljoin(pool.endpoint(), [code])))
            .await
    }
}

/// Resources that can be listed.
#[allow(async_fn_in_trait)]
pub trait Listable: Resource {
    /// Lists the collection, passing `args` as query parameters in order.
    ///
    /// A key listed twice is sent twice (`?id=a&id=b`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request fails in transit.
    async fn fetch_list(&self, args: Option<QueryParams>) -> Result<HttpResponse, HttpError> {
        let pool = self.pool();
        let mut builder = pool.request(HttpMethod::Get, pool.endpoint());
        if let Some(args) = args.filter(|args| !args.is_empty()) {
            builder = builder.query(args);
        }
        pool.send(builder).await
    }
}

/// Resources answering free-text searches.
#[allow(async_fn_in_trait)]
pub trait Searchable: Resource {
    /// Searches the collection with the `query` parameter.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request fails in transit.
    async fn search(&self, query: &str) -> Result<HttpResponse, HttpError> {
        let pool = self.pool();
        pool.send(
            pool.request(HttpMethod::Get, pool.endpoint())
                .query_param("query", query),
        )
        .await
    }
}

/// Resources supporting upserts with `PUT`.
#[allow(async_fn_in_trait)]
pub trait Updatable: Resource {
    /// Upserts `item` at `{endpoint}/{id}`.
    ///
    /// The id is `code` when given, otherwise the item's own `id` field.
    /// Numeric ids are used in their decimal form.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingResourceId`] (wrapped in
    /// [`HttpError::InvalidRequest`]) when no id can be resolved or `code`
    /// is blank, plus the errors of [`Creatable::create_item`].
    async fn update_create_item<T: Serialize + ?Sized>(
        &self,
        item: &T,
        code: Option<&str>,
    ) -> Result<HttpResponse, HttpError> {
        let body = serde_json::to_value(item)?;
        let id = match code {
            Some(code) => resource_code(code)?.to_string(),
            None => item_id(&body).ok_or(InvalidHttpRequestError::MissingResourceId)?,
        };

        let pool = self.pool();
        pool.send(
            pool.request(HttpMethod::Put, urljoin(pool.endpoint(), [id.as_str()]))
                .body(RequestBody::Json(body)),
        )
        .await
    }
}

/// Resources whose items can be deleted by code.
#[allow(async_fn_in_trait)]
pub trait Deletable: Resource {
    /// Deletes the item at `{endpoint}/{code}`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingResourceId`] if `code` is
    /// blank, or [`HttpError::Network`] if the request fails in transit.
    async fn delete_item(&self, code: &str) -> Result<HttpResponse, HttpError> {
        let code = resource_code(code)?;
        let pool = self.pool();
        pool.send(pool.request(HttpMethod::Delete, urljoin(pool.endpoint(), [code])))
            .await
    }
}

/// Rejects codes that would vanish from the joined URL.
fn resource_code(code: &str) -> Result<&str, InvalidHttpRequestError> {
    if code.trim_matches(|c: char| c == '/' || c.is_whitespace()).is_empty() {
        return Err(InvalidHttpRequestError::MissingResourceId);
    }
    Ok(code)
}

/// Reads the `id` field of a serialized item.
fn item_id(item: &Value) -> Option<String> {
    match item.get("id")? {
        Value::String(id) => resource_code(id).ok().map(str::to_string),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
