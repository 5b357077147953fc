//! VendorHub REST API
//!
//! Client side of the backend contract.
//!
//! # Endpoints
//!
//! ## Auth
//! - `POST /auth/register` - Create an account
//! - `POST /auth/login` - Exchange credentials for a bearer token
//!
//! ## Vendors
//! - `GET /vendors[?category=]` - List vendors
//! - `POST /vendors` - Create a vendor
//! - `PUT /vendors/:id` - Update a vendor
//! - `DELETE /vendors/:id` - Delete a vendor
//!
//! ## Contracts
//! - `GET /contracts[?status=]` - List contracts
//! - `POST /contracts`, `PUT /contracts/:id`, `DELETE /contracts/:id`
//!
//! ## Analytics
//! - `GET /analytics/summary`
//! - `GET /analytics/vendors-by-category`
//! - `GET /analytics/spending-by-vendor`
//! - `GET /analytics/contract-status`
//! - `GET /analytics/vendor-performance`
//!
//! ## Profiles
//! - `GET /profiles/top-performing`
//! - `GET /profiles/:vendor_id/performance`
//! - `POST /profiles/:vendor_id/performance`
//!
//! Everything except `/auth/*` requires `Authorization: Bearer <token>`.

pub mod client;
pub mod error;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{ApiClient, DEFAULT_API_BASE};
pub use error::{ApiError, ApiResult};
pub use transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};

#[cfg(feature = "native")]
pub use transport::ReqwestTransport;
