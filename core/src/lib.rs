//! Synchronous client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The caller executes the HTTP round-trip, so the
//! core stays deterministic and testable without a server.
//!
//! # Design
//! - `TodoClient` holds only `base_url`.
//! - Each route has a `build_*` (produces the request) and a `parse_*`
//!   (consumes the response).
//! - DTOs are defined independently from the server crate; the integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Todo, TodoData};
