// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use axum::body::{self, Body};
use axum::http::{Request, Response};
use serde_json::Value;

use haven_core::application::{
    browse::Paginator,
    ports::{source::ArticleSource, util::SlugGenerator},
    queries::articles::ArticleQueryService,
    services::ApplicationServices,
};
use haven_core::domain::article::ArticleStore;
use haven_core::infrastructure::{readiness::StoreHandle, util::DefaultSlugGenerator};
use haven_core::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::StaticSource;

pub const SITE_NAME: &str = "EverydayHaven";

pub fn slugger() -> Arc<dyn SlugGenerator> {
    Arc::new(DefaultSlugGenerator)
}

pub fn query_service() -> ArticleQueryService {
    ArticleQueryService::new(slugger(), Paginator::default(), SITE_NAME)
}

pub fn services_for(source: Arc<dyn ArticleSource>) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        source,
        slugger(),
        Paginator::default(),
        SITE_NAME,
    ))
}

/// Router over a store that is already loaded.
pub fn make_test_router(store: ArticleStore) -> axum::Router {
    let services = services_for(Arc::new(StaticSource::new(ArticleStore::empty())));
    let state = HttpState {
        services,
        store: StoreHandle::ready(store),
        store_ready_timeout: Duration::from_millis(200),
    };
    build_router(state)
}

/// Router whose store never finishes loading.
pub fn make_unready_router(timeout: Duration) -> axum::Router {
    let services = services_for(Arc::new(StaticSource::new(ArticleStore::empty())));
    let state = HttpState {
        services,
        store: StoreHandle::new(),
        store_ready_timeout: timeout,
    };
    build_router(state)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap_or_else(|err| {
        panic!(
            "response body is not JSON ({err}): {}",
            String::from_utf8_lossy(&bytes)
        )
    })
}
