use crate::domain::errors::DomainResult;
use crate::domain::project::entity::Project;
use crate::domain::project::value_objects::{ProjectId, ProjectSlug};
use async_trait::async_trait;

#[async_trait]
pub trait ProjectReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ProjectId) -> DomainResult<Option<Project>>;
    async fn find_by_slug(&self, slug: &ProjectSlug) -> DomainResult<Option<Project>>;
}
