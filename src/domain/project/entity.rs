// src/domain/project/entity.rs
use crate::domain::project::value_objects::{ProjectId, ProjectSlug, ProjectTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Project {
    pub id: ProjectId,
    pub title: ProjectTitle,
    pub slug: ProjectSlug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

