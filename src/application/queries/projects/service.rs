// src/application/queries/projects/service.rs
use std::sync::Arc;

use crate::domain::project::services::ProjectSlugService;

pub struct ProjectSlugQueryService {
    pub(super) slug_service: Arc<ProjectSlugService>,
}

impl ProjectSlugQueryService {
    pub fn new(slug_service: Arc<ProjectSlugService>) -> Self {
        Self { slug_service }
    }
}
