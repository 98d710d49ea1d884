//! HTTP client types for marketplace API communication.
//!
//! This module provides the transport layer under the resource tree.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client shared by all resource pools
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: The raw response (status, headers, body)
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`RequestBody`] and [`FilePart`]: JSON and multipart request bodies
//!
//! # Response Handling
//!
//! The client never inspects status codes. A 404 or a 500 is returned as
//! an `Ok(HttpResponse)`; only requests that cannot be built or sent fail
//! with an [`HttpError`]. There is no retry logic.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION, SELLER_ID_HEADER, SUBSCRIPTION_KEY_HEADER};
pub use http_request::{
    FilePart, HttpMethod, HttpRequest, HttpRequestBuilder, QueryParams, RequestBody,
};
pub use http_response::HttpResponse;
