// src/application/commands/projects/resolve.rs
use super::ProjectSlugCommandService;
use crate::{
    application::{
        dto::ResolvedSlugDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::project::{ProjectId, ProjectSlug, ProjectTitle},
};

/// Settles the slug a project is saved under. Whatever the form showed, this
/// is the authoritative uniqueness check at submission time.
pub struct ResolveProjectSlugCommand {
    pub title: String,
    /// Slug typed by the user. Blank or absent means "derive from the title".
    pub slug: Option<String>,
    /// Set when editing an existing project.
    pub project_id: Option<i64>,
}

impl ProjectSlugCommandService {
    pub async fn resolve_slug(
        &self,
        command: ResolveProjectSlugCommand,
    ) -> ApplicationResult<ResolvedSlugDto> {
        let title = ProjectTitle::new(command.title)?;
        let project_id = command.project_id.map(ProjectId::new).transpose()?;

        if let Some(id) = project_id {
            self.read_repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| ApplicationError::not_found("project not found"))?;
        }

        let requested = command.slug.filter(|raw| !raw.trim().is_empty());
        let Some(raw) = requested else {
            let slug = self
                .slug_service
                .generate_unique_slug(&title, project_id)
                .await?;
            tracing::info!(slug = %slug, "generated project slug");
            return Ok(ResolvedSlugDto {
                slug: slug.into(),
                generated: true,
            });
        };

        let canonical = self.slug_service.generator().slugify(&raw);
        if canonical.is_empty() {
            return Err(ApplicationError::validation(
                "slug must contain at least one letter or digit",
            ));
        }
        let slug = ProjectSlug::new(canonical)?;
        self.slug_service.ensure_available(&slug, project_id).await?;

        tracing::info!(slug = %slug, "accepted custom project slug");
        Ok(ResolvedSlugDto {
            slug: slug.into(),
            generated: false,
        })
    }
}
