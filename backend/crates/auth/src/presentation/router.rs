//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::CredentialRepository;
use crate::infra::CredentialStore;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_session;

/// Create the Auth router with the configured credential store
pub fn auth_router(store: CredentialStore, config: AuthConfig) -> Router {
    auth_router_generic(store, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: CredentialRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let protected = Router::new()
        .route("/me", get(handlers::me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session::<R>,
        ));

    Router::new()
        .route("/register", post(handlers::sign_up::<R>))
        .route("/login", post(handlers::sign_in::<R>))
        .route("/logout", post(handlers::sign_out::<R>))
        .route("/session", get(handlers::session_status::<R>))
        .merge(protected)
        .with_state(state)
}
