// src/application/queries/projects/slug_availability.rs
use super::ProjectSlugQueryService;
use crate::{
    application::{
        dto::{SlugAvailabilityDto, SlugPreviewDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::project::{ProjectId, ProjectSlug},
};

pub struct CheckSlugAvailabilityQuery {
    pub slug: String,
    /// Record being edited; its own slug is reported as available.
    pub exclude_id: Option<i64>,
}

pub struct PreviewSlugQuery {
    pub text: String,
}

impl ProjectSlugQueryService {
    pub async fn check_slug_availability(
        &self,
        query: CheckSlugAvailabilityQuery,
    ) -> ApplicationResult<SlugAvailabilityDto> {
        let canonical = self.slug_service.generator().slugify(&query.slug);
        if canonical.is_empty() {
            return Err(ApplicationError::validation("slug cannot be empty"));
        }

        let slug = ProjectSlug::new(canonical)?;
        let exclude_id = query.exclude_id.map(ProjectId::new).transpose()?;
        let available = self.slug_service.is_available(&slug, exclude_id).await?;

        tracing::debug!(slug = %slug, available, "slug availability checked");
        Ok(SlugAvailabilityDto {
            slug: slug.into(),
            available,
        })
    }

    pub fn preview_slug(&self, query: PreviewSlugQuery) -> SlugPreviewDto {
        let slug = self.slug_service.generator().slugify(&query.text);
        SlugPreviewDto {
            text: query.text,
            slug,
        }
    }
}
