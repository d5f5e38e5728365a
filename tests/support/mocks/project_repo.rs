// tests/support/mocks/project_repo.rs
use async_trait::async_trait;
use folio_core::domain::errors::{DomainError, DomainResult};
use folio_core::domain::project::{
    Project, ProjectId, ProjectReadRepository, ProjectSlug, ProjectTitle,
};
use std::sync::Mutex;

/// Project repository backed by a vector; ids are assigned from 1.
#[derive(Default)]
pub struct InMemoryProjectRepo {
    rows: Mutex<Vec<Project>>,
    lookups: Mutex<Vec<String>>,
}

impl InMemoryProjectRepo {
    pub fn with_projects(projects: &[(&str, &str)]) -> Self {
        let repo = Self::default();
        for (title, slug) in projects {
            repo.insert(title, slug);
        }
        repo
    }

    pub fn insert(&self, title: &str, slug: &str) -> ProjectId {
        let mut rows = self.rows.lock().unwrap();
        let id = ProjectId::new(rows.len() as i64 + 1).unwrap();
        let now = super::time::fixed_now();
        rows.push(Project {
            id,
            title: ProjectTitle::new(title).unwrap(),
            slug: ProjectSlug::new(slug).unwrap(),
            created_at: now,
            updated_at: now,
        });
        id
    }

    /// Slugs looked up so far, in call order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProjectReadRepository for InMemoryProjectRepo {
    async fn find_by_id(&self, id: ProjectId) -> DomainResult<Option<Project>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &ProjectSlug) -> DomainResult<Option<Project>> {
        self.lookups.lock().unwrap().push(slug.to_string());
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|p| &p.slug == slug).cloned())
    }
}

/// Repository whose every call fails, standing in for an unreachable database.
pub struct FailingProjectRepo;

#[async_trait]
impl ProjectReadRepository for FailingProjectRepo {
    async fn find_by_id(&self, _id: ProjectId) -> DomainResult<Option<Project>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn find_by_slug(&self, _slug: &ProjectSlug) -> DomainResult<Option<Project>> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}
