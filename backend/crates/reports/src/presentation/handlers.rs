//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use std::sync::Arc;

use crate::application::{
    FindVolunteersUseCase, ListIncidentsUseCase, ListPostsByUserUseCase, VolunteerFilter,
};
use crate::domain::entities::Record;
use crate::domain::repository::ReportRepository;
use crate::domain::value_objects::UserId;
use crate::error::{ReportError, ReportResult};
use crate::presentation::dto::{PostsQuery, RegionQuery, SkillQuery};

/// Shared state for report handlers
#[derive(Clone)]
pub struct ReportsAppState<R>
where
    R: ReportRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /api/incidents
pub async fn list_incidents<R>(
    State(state): State<ReportsAppState<R>>,
) -> ReportResult<Json<Vec<Record>>>
where
    R: ReportRepository + Clone + Send + Sync + 'static,
{
    let incidents = ListIncidentsUseCase::new(state.repo.clone()).execute().await?;
    Ok(Json(incidents))
}

/// GET /api/posts?userId=N
pub async fn list_posts<R>(
    State(state): State<ReportsAppState<R>>,
    Query(query): Query<PostsQuery>,
) -> ReportResult<Json<Vec<Record>>>
where
    R: ReportRepository + Clone + Send + Sync + 'static,
{
    let user_id: UserId = query
        .user_id
        .ok_or_else(|| ReportError::InvalidInput("userId is required".to_string()))?
        .parse()?;

    let posts = ListPostsByUserUseCase::new(state.repo.clone())
        .execute(user_id)
        .await?;
    Ok(Json(posts))
}

/// GET /api/users/{user_id}/posts
pub async fn list_user_posts<R>(
    State(state): State<ReportsAppState<R>>,
    Path(user_id): Path<String>,
) -> ReportResult<Json<Vec<Record>>>
where
    R: ReportRepository + Clone + Send + Sync + 'static,
{
    let user_id: UserId = user_id.parse()?;

    let posts = ListPostsByUserUseCase::new(state.repo.clone())
        .execute(user_id)
        .await?;
    Ok(Json(posts))
}

/// GET /api/volunteers/region?region=R
pub async fn volunteers_by_region<R>(
    State(state): State<ReportsAppState<R>>,
    Query(query): Query<RegionQuery>,
) -> ReportResult<Json<Vec<Record>>>
where
    R: ReportRepository + Clone + Send + Sync + 'static,
{
    let filter = VolunteerFilter::Region(query.region.unwrap_or_default());
    let volunteers = FindVolunteersUseCase::new(state.repo.clone())
        .execute(filter)
        .await?;
    Ok(Json(volunteers))
}

/// GET /api/volunteers/skills?skill=S
pub async fn volunteers_by_skill<R>(
    State(state): State<ReportsAppState<R>>,
    Query(query): Query<SkillQuery>,
) -> ReportResult<Json<Vec<Record>>>
where
    R: ReportRepository + Clone + Send + Sync + 'static,
{
    let filter = VolunteerFilter::Skill(query.skill.unwrap_or_default());
    let volunteers = FindVolunteersUseCase::new(state.repo.clone())
        .execute(filter)
        .await?;
    Ok(Json(volunteers))
}
