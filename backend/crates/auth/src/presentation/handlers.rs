//! HTTP Handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    ReadSessionUseCase, SignInInput, SignInUseCase, SignOutUseCase, SignUpInput, SignUpUseCase,
};
use crate::domain::entity::session::SessionClaims;
use crate::domain::repository::CredentialRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    MeResponse, SessionResponse, SignInRequest, SignInResponse, SignUpRequest, SignUpResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: CredentialRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/register
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: CredentialRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        username: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            username: output.username.into_inner(),
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    jar: CookieJar,
    Json(req): Json<SignInRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: CredentialRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignInInput {
        username: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    let jar = jar.add(state.config.cookie.build_cookie(output.session_token));

    Ok((
        jar,
        Json(SignInResponse {
            username: output.username.into_inner(),
            expires_at: output.expires_at,
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/logout
pub async fn sign_out<R>(State(state): State<AuthAppState<R>>, jar: CookieJar) -> impl IntoResponse
where
    R: CredentialRepository + Clone + Send + Sync + 'static,
{
    let token = state.config.cookie.read(&jar);
    SignOutUseCase::new().execute(token.as_deref());

    let jar = jar.add(state.config.cookie.build_removal_cookie());

    (StatusCode::NO_CONTENT, jar)
}

// ============================================================================
// Session
// ============================================================================

/// GET /api/session
///
/// Display only. Does not verify the token and does not touch the datastore.
pub async fn session_status<R>(
    State(state): State<AuthAppState<R>>,
    jar: CookieJar,
) -> Json<SessionResponse>
where
    R: CredentialRepository + Clone + Send + Sync + 'static,
{
    let token = state.config.cookie.read(&jar);
    let view = ReadSessionUseCase::new().execute(token.as_deref());

    Json(SessionResponse::from(view))
}

/// GET /api/me (behind `require_session`)
pub async fn me(Extension(claims): Extension<SessionClaims>) -> Json<MeResponse> {
    Json(MeResponse {
        username: claims.username,
        issued_at: claims.iat,
        expires_at: claims.exp,
    })
}
