//! List Posts By User Use Case
//!
//! Every returned row has `user_id` equal to the requested id, whatever the
//! backend sent.

use std::sync::Arc;

use crate::domain::entities::Record;
use crate::domain::repository::ReportRepository;
use crate::domain::value_objects::UserId;
use crate::error::ReportResult;

/// List posts use case
pub struct ListPostsByUserUseCase<R>
where
    R: ReportRepository,
{
    repo: Arc<R>,
}

impl<R> ListPostsByUserUseCase<R>
where
    R: ReportRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: UserId) -> ReportResult<Vec<Record>> {
        let mut posts = self.repo.list_posts_by_user(user_id).await?;

        let fetched = posts.len();
        posts.retain(|post| post.user_id() == Some(user_id.value()));

        if posts.len() != fetched {
            tracing::warn!(
                user_id = %user_id,
                dropped = fetched - posts.len(),
                "Backend returned posts for another user"
            );
        }

        tracing::debug!(user_id = %user_id, count = posts.len(), "Fetched posts");
        Ok(posts)
    }
}
