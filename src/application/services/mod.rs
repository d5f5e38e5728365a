// src/application/services/mod.rs
use std::sync::Arc;
use std::time::Duration;

use crate::{
    application::{
        commands::projects::ProjectSlugCommandService,
        ports::{SlugChangeListenerPort, time::Clock, util::SlugGenerator},
        queries::projects::{ProjectSlugQueryService, RepositorySlugAvailabilityChecker},
        slug::{DEFAULT_DEBOUNCE, SlugAvailabilityController},
    },
    domain::project::{ProjectId, ProjectReadRepository, services::ProjectSlugService},
};

pub struct ApplicationServices {
    pub slug_queries: Arc<ProjectSlugQueryService>,
    pub slug_commands: Arc<ProjectSlugCommandService>,
    slugger: Arc<dyn SlugGenerator>,
    slug_check_debounce: Duration,
}

impl ApplicationServices {
    pub fn new(
        project_repo: Arc<dyn ProjectReadRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(ProjectSlugService::new(
            Arc::clone(&project_repo),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let slug_queries = Arc::new(ProjectSlugQueryService::new(Arc::clone(&slug_service)));
        let slug_commands = Arc::new(ProjectSlugCommandService::new(
            Arc::clone(&project_repo),
            Arc::clone(&slug_service),
        ));

        Self {
            slug_queries,
            slug_commands,
            slugger,
            slug_check_debounce: DEFAULT_DEBOUNCE,
        }
    }

    pub fn with_slug_check_debounce(mut self, debounce: Duration) -> Self {
        self.slug_check_debounce = debounce;
        self
    }

    pub fn slug_check_debounce(&self) -> Duration {
        self.slug_check_debounce
    }

    /// Builds the slug field controller for a create (`project_id = None`) or
    /// edit form, checking availability against the project repository. The
    /// form can later be rebound with [`SlugAvailabilityController::bind_entity`].
    pub fn slug_field_controller(
        &self,
        project_id: Option<ProjectId>,
        listener: Arc<SlugChangeListenerPort>,
    ) -> SlugAvailabilityController {
        let checker = Arc::new(RepositorySlugAvailabilityChecker::new(Arc::clone(
            &self.slug_queries,
        )));

        SlugAvailabilityController::builder(Arc::clone(&self.slugger), listener)
            .checker(checker)
            .entity(project_id)
            .debounce(self.slug_check_debounce)
            .build()
    }
}
