use std::sync::Arc;

use async_trait::async_trait;

use super::{CheckSlugAvailabilityQuery, ProjectSlugQueryService};
use crate::application::{ApplicationResult, ports::availability::SlugAvailabilityChecker};
use crate::domain::project::ProjectId;

/// Backs a slug field with the project repository.
pub struct RepositorySlugAvailabilityChecker {
    queries: Arc<ProjectSlugQueryService>,
}

impl RepositorySlugAvailabilityChecker {
    pub fn new(queries: Arc<ProjectSlugQueryService>) -> Self {
        Self { queries }
    }
}

#[async_trait]
impl SlugAvailabilityChecker for RepositorySlugAvailabilityChecker {
    async fn is_available(
        &self,
        slug: &str,
        exclude: Option<ProjectId>,
    ) -> ApplicationResult<bool> {
        let dto = self
            .queries
            .check_slug_availability(CheckSlugAvailabilityQuery {
                slug: slug.to_string(),
                exclude_id: exclude.map(i64::from),
            })
            .await?;
        Ok(dto.available)
    }
}
