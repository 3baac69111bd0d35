//! Reports Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::repository::ReportRepository;
use crate::infra::ReportStore;
use crate::presentation::handlers::{self, ReportsAppState};

/// Create the Reports router with the configured store
pub fn reports_router(store: ReportStore) -> Router {
    reports_router_generic(store)
}

/// Create a generic Reports router for any repository implementation
pub fn reports_router_generic<R>(repo: R) -> Router
where
    R: ReportRepository + Clone + Send + Sync + 'static,
{
    let state = ReportsAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/incidents", get(handlers::list_incidents::<R>))
        .route("/posts", get(handlers::list_posts::<R>))
        .route("/users/{user_id}/posts", get(handlers::list_user_posts::<R>))
        .route("/volunteers/region", get(handlers::volunteers_by_region::<R>))
        .route("/volunteers/skills", get(handlers::volunteers_by_skill::<R>))
        .with_state(state)
}
