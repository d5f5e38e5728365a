// src/infrastructure/repositories/postgres_project.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::project::{Project, ProjectId, ProjectReadRepository, ProjectSlug, ProjectTitle};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProjectRow {
    id: i64,
    title: String,
    slug: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProjectRow> for Project {
    type Error = DomainError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        Ok(Project {
            id: ProjectId::new(row.id)?,
            title: ProjectTitle::new(row.title)?,
            slug: ProjectSlug::new(row.slug)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ProjectReadRepository for PostgresProjectRepository {
    async fn find_by_id(&self, id: ProjectId) -> DomainResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(
            "SELECT id, title, slug, created_at, updated_at FROM projects WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Project::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ProjectSlug) -> DomainResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(
            "SELECT id, title, slug, created_at, updated_at FROM projects WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Project::try_from).transpose()
    }
}
