//! API DTOs (Data Transfer Objects)
//!
//! Rows are returned as bare JSON arrays of objects. Query parameters are
//! optional at the extractor level so a missing one becomes a 400 problem
//! response instead of a plain-text rejection.

use serde::Deserialize;

/// `GET /api/posts?userId=N`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsQuery {
    pub user_id: Option<String>,
}

/// `GET /api/volunteers/region?region=R`
#[derive(Debug, Clone, Deserialize)]
pub struct RegionQuery {
    pub region: Option<String>,
}

/// `GET /api/volunteers/skills?skill=S`
#[derive(Debug, Clone, Deserialize)]
pub struct SkillQuery {
    pub skill: Option<String>,
}
