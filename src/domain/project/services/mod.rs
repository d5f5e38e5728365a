// src/domain/project/services/mod.rs
use std::sync::Arc;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::project::repository::ProjectReadRepository;
use crate::domain::project::value_objects::{ProjectId, ProjectSlug, ProjectTitle};

/// Domain service answering "is this slug free?" and producing unique slugs
/// for projects.
pub struct ProjectSlugService {
    read_repo: Arc<dyn ProjectReadRepository>,
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl ProjectSlugService {
    pub fn new(
        read_repo: Arc<dyn ProjectReadRepository>,
        generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            generator,
            clock,
        }
    }

    pub fn generator(&self) -> &dyn SlugGenerator {
        self.generator.as_ref()
    }

    /// A slug held by `exclude_id` itself counts as available, so an edit form
    /// does not report its own record's slug as taken.
    pub async fn is_available(
        &self,
        slug: &ProjectSlug,
        exclude_id: Option<ProjectId>,
    ) -> DomainResult<bool> {
        match self.read_repo.find_by_slug(slug).await? {
            Some(existing) => Ok(exclude_id.is_some_and(|id| id == existing.id)),
            None => Ok(true),
        }
    }

    pub async fn ensure_available(
        &self,
        slug: &ProjectSlug,
        exclude_id: Option<ProjectId>,
    ) -> DomainResult<()> {
        if self.is_available(slug, exclude_id).await? {
            Ok(())
        } else {
            Err(DomainError::Conflict(format!("slug `{slug}` is already in use")))
        }
    }

    pub async fn generate_unique_slug(
        &self,
        title: &ProjectTitle,
        ignore_id: Option<ProjectId>,
    ) -> DomainResult<ProjectSlug> {
        let base = self.generator.slugify(title.as_str());
        let base_slug = if base.is_empty() {
            format!("project-{}", self.clock.unix_timestamp())
        } else {
            base
        };

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = ProjectSlug::new(candidate.clone())?;
            if self.is_available(&slug, ignore_id).await? {
                return Ok(slug);
            }
            candidate = format!("{base_slug}-{counter}");
            counter += 1;
        }
    }
}
