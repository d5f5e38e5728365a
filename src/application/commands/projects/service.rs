// src/application/commands/projects/service.rs
use std::sync::Arc;

use crate::domain::project::{ProjectReadRepository, services::ProjectSlugService};

pub struct ProjectSlugCommandService {
    pub(super) read_repo: Arc<dyn ProjectReadRepository>,
    pub(super) slug_service: Arc<ProjectSlugService>,
}

impl ProjectSlugCommandService {
    pub fn new(
        read_repo: Arc<dyn ProjectReadRepository>,
        slug_service: Arc<ProjectSlugService>,
    ) -> Self {
        Self {
            read_repo,
            slug_service,
        }
    }
}
