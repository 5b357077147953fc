//! Fetch Transport
//!
//! gloo-net implementation of the core [`Transport`] seam, with a
//! per-request timeout.

use async_trait::async_trait;
use futures_util::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;

use vendorhub::api::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use vendorhub::DEFAULT_API_BASE;

/// localStorage key for a user-chosen backend
const API_URL_KEY: &str = "vendorhub_api_url";

pub const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, url.trim());
        }
    }
}

pub struct FetchTransport {
    timeout_ms: u32,
}

impl FetchTransport {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::Other(e.to_string()))?;

        let exchange = async move {
            let response = built
                .send()
                .await
                .map_err(|e| TransportError::Connect(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| TransportError::Other(e.to_string()))?;
            Ok(HttpResponse { status, body })
        };

        match select(
            Box::pin(exchange),
            Box::pin(TimeoutFuture::new(self.timeout_ms)),
        ).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(TransportError::Timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_api_base_override_and_fallback() {
        set_api_base("http://example.test/api/ ");
        assert_eq!(get_api_base(), "http://example.test/api");

        set_api_base("");
        assert_eq!(get_api_base(), DEFAULT_API_BASE.trim_end_matches('/'));
    }
}
