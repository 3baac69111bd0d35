//! Auth Middleware
//!
//! Middleware for requiring a verified session on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use crate::application::VerifySessionUseCase;
use crate::domain::repository::CredentialRepository;
use crate::error::AuthError;
use crate::presentation::handlers::AuthAppState;

/// Middleware that requires a signed, unexpired session token
///
/// On success the verified [`SessionClaims`](crate::domain::SessionClaims)
/// are inserted into the request extensions.
pub async fn require_session<R>(
    State(state): State<AuthAppState<R>>,
    jar: CookieJar,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError>
where
    R: CredentialRepository + Clone + Send + Sync + 'static,
{
    let token = state.config.cookie.read(&jar);

    let claims = VerifySessionUseCase::new(state.config.clone()).execute(token.as_deref())?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
