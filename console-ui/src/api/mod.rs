//! Browser side of the API client: the fetch transport and the configured
//! base URL.

pub mod transport;

pub use transport::{get_api_base, set_api_base, FetchTransport, REQUEST_TIMEOUT_MS};
