//! REST API Client
//!
//! One method per backend resource operation. Authenticated calls read the
//! bearer token from the [`SessionStore`] right before sending, and a 401
//! clears that store before the error reaches the caller.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;

use super::error::{ApiError, ApiResult};
use super::transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use crate::models::{
    AnalyticsSummary, CategoryCount, Contract, ContractInput, EntityId, LoginRequest,
    LoginResponse, MessageResponse, MonthlyRating, RegisterRequest, Review, ReviewInput,
    StatusCount, TopVendor, Vendor, VendorInput, VendorSpending,
};
use crate::session::{SessionStore, SignOutReason};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn Transport>,
    session: Rc<SessionStore>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Rc<dyn Transport>,
        session: Rc<SessionStore>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Rc<SessionStore> {
        &self.session
    }

    // ============ Auth ============

    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<MessageResponse> {
        self.public(Method::Post, "/auth/register", request, "Registration failed")
            .await
    }

    /// Exchange credentials for a token. Does not touch the session store;
    /// see [`crate::pages::auth::login`].
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        self.public(Method::Post, "/auth/login", request, "Login failed")
            .await
    }

    // ============ Vendors ============

    pub async fn list_vendors(&self, category: Option<&str>) -> ApiResult<Vec<Vendor>> {
        let path = with_query("/vendors", "category", category);
        self.authed(Method::Get, &path, None::<&()>).await
    }

    pub async fn create_vendor(&self, input: &VendorInput) -> ApiResult<Vendor> {
        self.authed(Method::Post, "/vendors", Some(input)).await
    }

    pub async fn update_vendor(&self, id: EntityId, input: &VendorInput) -> ApiResult<Vendor> {
        self.authed(Method::Put, &format!("/vendors/{}", id), Some(input))
            .await
    }

    pub async fn delete_vendor(&self, id: EntityId) -> ApiResult<MessageResponse> {
        self.authed(Method::Delete, &format!("/vendors/{}", id), None::<&()>)
            .await
    }

    // ============ Contracts ============

    pub async fn list_contracts(&self, status: Option<&str>) -> ApiResult<Vec<Contract>> {
        let path = with_query("/contracts", "status", status);
        self.authed(Method::Get, &path, None::<&()>).await
    }

    pub async fn create_contract(&self, input: &ContractInput) -> ApiResult<Contract> {
        self.authed(Method::Post, "/contracts", Some(input)).await
    }

    pub async fn update_contract(
        &self,
        id: EntityId,
        input: &ContractInput,
    ) -> ApiResult<Contract> {
        self.authed(Method::Put, &format!("/contracts/{}", id), Some(input))
            .await
    }

    pub async fn delete_contract(&self, id: EntityId) -> ApiResult<MessageResponse> {
        self.authed(Method::Delete, &format!("/contracts/{}", id), None::<&()>)
            .await
    }

    // ============ Analytics ============

    pub async fn analytics_summary(&self) -> ApiResult<AnalyticsSummary> {
        self.authed(Method::Get, "/analytics/summary", None::<&()>)
            .await
    }

    pub async fn vendors_by_category(&self) -> ApiResult<Vec<CategoryCount>> {
        self.authed(Method::Get, "/analytics/vendors-by-category", None::<&()>)
            .await
    }

    pub async fn spending_by_vendor(&self) -> ApiResult<Vec<VendorSpending>> {
        self.authed(Method::Get, "/analytics/spending-by-vendor", None::<&()>)
            .await
    }

    pub async fn contract_status(&self) -> ApiResult<Vec<StatusCount>> {
        self.authed(Method::Get, "/analytics/contract-status", None::<&()>)
            .await
    }

    pub async fn vendor_performance(&self) -> ApiResult<Vec<MonthlyRating>> {
        self.authed(Method::Get, "/analytics/vendor-performance", None::<&()>)
            .await
    }

    // ============ Profiles ============

    pub async fn top_performing_vendors(&self) -> ApiResult<Vec<TopVendor>> {
        self.authed(Method::Get, "/profiles/top-performing", None::<&()>)
            .await
    }

    pub async fn performance_reviews(&self, vendor_id: EntityId) -> ApiResult<Vec<Review>> {
        let path = format!("/profiles/{}/performance", vendor_id);
        self.authed(Method::Get, &path, None::<&()>).await
    }

    pub async fn add_performance_review(
        &self,
        vendor_id: EntityId,
        input: &ReviewInput,
    ) -> ApiResult<Review> {
        let path = format!("/profiles/{}/performance", vendor_id);
        self.authed(Method::Post, &path, Some(input)).await
    }

    // ============ Plumbing ============

    /// Unauthenticated call. A 401 here means bad credentials, not an
    /// expired session, so it never clears the store.
    async fn public<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = HttpRequest::new(method, self.url(path)).body(serde_json::to_string(body)?);
        let response = self.send(request).await?;

        if !response.is_success() {
            return Err(request_failed(&response, fallback));
        }
        decode(&response)
    }

    async fn authed<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let token = self.session.token().ok_or(ApiError::NotAuthenticated)?;

        let mut request = HttpRequest::new(method, self.url(path))
            .header("Authorization", format!("Bearer {}", token));
        if let Some(body) = body {
            request = request.body(serde_json::to_string(body)?);
        }

        let response = self.send(request).await?;

        if response.status == 401 {
            tracing::warn!(%method, path, "Backend rejected token");
            self.session.clear_session(SignOutReason::Expired);
            return Err(ApiError::AuthExpired);
        }
        if !response.is_success() {
            return Err(request_failed(&response, "Request failed"));
        }
        decode(&response)
    }

    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let method = request.method;
        let url = request.url.clone();
        tracing::debug!(%method, %url, "Sending request");

        match self.transport.send(request).await {
            Ok(response) => {
                tracing::debug!(%method, %url, status = response.status, "Response received");
                Ok(response)
            }
            Err(e) => {
                tracing::warn!(%method, %url, error = %e, "Request failed without response");
                Err(match e {
                    TransportError::Timeout => ApiError::Network("request timed out".to_string()),
                    other => ApiError::Network(other.to_string()),
                })
            }
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Append `?key=value` when the filter is set and non-empty
fn with_query(path: &str, key: &str, value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => format!("{}?{}={}", path, key, urlencoding::encode(v)),
        None => path.to_string(),
    }
}

fn request_failed(response: &HttpResponse, fallback: &str) -> ApiError {
    // Accepts {"message": ..}, {"error": ..} and {"error": {"message": ..}}
    let message = serde_json::from_str::<serde_json::Value>(&response.body)
        .ok()
        .and_then(|body| {
            body.get("message")
                .and_then(|m| m.as_str())
                .or_else(|| body.get("error").and_then(|e| e.as_str()))
                .or_else(|| body.pointer("/error/message").and_then(|m| m.as_str()))
                .map(str::to_string)
        })
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("{} (HTTP {})", fallback, response.status));

    ApiError::RequestFailed {
        status: response.status,
        message,
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> ApiResult<T> {
    serde_json::from_str(&response.body).map_err(ApiError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::ScriptedTransport;
    use crate::models::User;
    use crate::session::{MemoryStore, SessionEvent};
    use std::cell::Cell;

    fn user() -> User {
        User {
            id: 1,
            username: "dana".to_string(),
            email: "dana@example.com".to_string(),
            role: Some("admin".to_string()),
        }
    }

    fn client(transport: Rc<ScriptedTransport>, signed_in: bool) -> ApiClient {
        let session = Rc::new(SessionStore::new(Rc::new(MemoryStore::new())));
        if signed_in {
            session.set_session("tok-1", &user()).unwrap();
        }
        ApiClient::new("http://backend/api/", transport, session)
    }

    #[tokio::test]
    async fn test_bearer_token_attached() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.respond(200, "[]");
        let api = client(transport.clone(), true);

        let vendors = api.list_vendors(None).await.unwrap();
        assert!(vendors.is_empty());

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "http://backend/api/vendors");
        assert_eq!(sent[0].header_value("Authorization"), Some("Bearer tok-1"));
    }

    #[tokio::test]
    async fn test_category_filter_in_query() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.respond(200, "[]");
        transport.respond(200, "[]");
        transport.respond(200, "[]");
        let api = client(transport.clone(), true);

        api.list_vendors(Some("IT")).await.unwrap();
        api.list_vendors(Some("Office Supplies")).await.unwrap();
        api.list_vendors(Some("")).await.unwrap();

        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert!(urls[0].contains("category=IT"));
        assert!(urls[1].ends_with("/vendors?category=Office%20Supplies"));
        assert_eq!(urls[2], "http://backend/api/vendors");
    }

    #[tokio::test]
    async fn test_no_token_skips_network() {
        let transport = Rc::new(ScriptedTransport::new());
        let api = client(transport.clone(), false);

        let err = api.list_contracts(None).await.unwrap_err();
        assert_eq!(err, ApiError::NotAuthenticated);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_401_clears_session_before_returning() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.respond(401, r#"{"message": "Token has expired"}"#);
        let api = client(transport, true);

        let sign_outs = Rc::new(Cell::new(0));
        let s = Rc::clone(&sign_outs);
        api.session().subscribe(move |ev| {
            if *ev == SessionEvent::SignedOut(SignOutReason::Expired) {
                s.set(s.get() + 1);
            }
        });

        let err = api.analytics_summary().await.unwrap_err();
        assert_eq!(err, ApiError::AuthExpired);
        assert!(!api.session().is_authenticated());
        assert_eq!(sign_outs.get(), 1);
    }

    #[tokio::test]
    async fn test_request_failed_uses_body_message() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.respond(400, r#"{"message": "Name is required"}"#);
        transport.respond(500, "<html>oops</html>");
        let api = client(transport, true);

        let err = api.create_vendor(&VendorInput::default()).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::RequestFailed {
                status: 400,
                message: "Name is required".to_string()
            }
        );

        let err = api.delete_vendor(3).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::RequestFailed {
                status: 500,
                message: "Request failed (HTTP 500)".to_string()
            }
        );
        assert!(api.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_network_error() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.fail(TransportError::Connect("refused".to_string()));
        transport.fail(TransportError::Timeout);
        let api = client(transport, true);

        assert!(matches!(
            api.list_vendors(None).await,
            Err(ApiError::Network(_))
        ));
        assert_eq!(
            api.list_vendors(None).await.unwrap_err(),
            ApiError::Network("request timed out".to_string())
        );
    }

    #[tokio::test]
    async fn test_login_401_does_not_clear_session() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.respond(401, r#"{"message": "Invalid credentials"}"#);
        let api = client(transport.clone(), true);

        let err = api
            .login(&LoginRequest {
                email: "dana@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(api.session().is_authenticated());
        assert!(transport.requests()[0].header_value("Authorization").is_none());
    }

    #[tokio::test]
    async fn test_decode_error() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.respond(200, r#"{"unexpected": true}"#);
        let api = client(transport, true);

        assert!(matches!(
            api.list_vendors(None).await,
            Err(ApiError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_review_path_and_body() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.respond(
            201,
            r#"{"id": 9, "vendor_id": 4, "rating": 4.5, "comments": "On time", "date": "2026-10-01"}"#,
        );
        let api = client(transport.clone(), true);

        let review = api
            .add_performance_review(
                4,
                &ReviewInput {
                    rating: 4.5,
                    comments: "On time".to_string(),
                    date: "2026-10-01".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(review.vendor_id, 4);

        let sent = &transport.requests()[0];
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "http://backend/api/profiles/4/performance");
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["rating"], 4.5);
    }
}
