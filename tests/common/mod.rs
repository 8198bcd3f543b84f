//! Shared helpers for driving the router in tests

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use gym_site::{
    accounts::{NewSignupAccount, SignupAccount},
    config::SiteConfig,
    inquiries::{ContactInquiry, NewContactInquiry},
    router,
    store::{memory::MemoryStore, RecordStore, StoreError},
    AppState,
};
use tower::ServiceExt;

/// Lowest cost bcrypt accepts, keeps hashing fast in tests
pub const TEST_PASSWORD_COST: u32 = 4;

pub fn test_config() -> SiteConfig {
    SiteConfig {
        password_cost: TEST_PASSWORD_COST,
        ..SiteConfig::default()
    }
}

/// Router backed by a fresh in-memory store
pub fn memory_app() -> (Router, Arc<MemoryStore>) {
    memory_app_with(test_config())
}

pub fn memory_app_with(config: SiteConfig) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let app = router(AppState::new(store.clone(), config));

    (app, store)
}

/// Router whose store fails every call
pub fn failing_app() -> Router {
    router(AppState::new(Arc::new(FailingStore), test_config()))
}

pub struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
    async fn create_inquiry(
        &self,
        _inquiry: NewContactInquiry,
    ) -> Result<ContactInquiry, StoreError> {
        Err(StoreError::Connection("connection refused".to_owned()))
    }

    async fn create_account(
        &self,
        _account: NewSignupAccount,
    ) -> Result<SignupAccount, StoreError> {
        Err(StoreError::Connection("connection refused".to_owned()))
    }

    async fn find_account_by_name(
        &self,
        _name: &str,
    ) -> Result<Option<SignupAccount>, StoreError> {
        Err(StoreError::Connection("connection refused".to_owned()))
    }
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// POST an already url-encoded form body
pub async fn post_form(app: &Router, uri: &str, form: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_owned()))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    String::from_utf8_lossy(&body).into_owned()
}
