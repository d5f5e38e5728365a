// src/application/ports/availability.rs
use crate::application::ApplicationResult;
use crate::domain::project::ProjectId;
use async_trait::async_trait;

/// Answers whether a candidate slug is still free. A slug already owned by
/// `exclude` counts as free. Implementations should be idempotent and
/// side-effect free; callers may issue overlapping requests.
#[async_trait]
pub trait SlugAvailabilityChecker: Send + Sync {
    async fn is_available(&self, slug: &str, exclude: Option<ProjectId>)
    -> ApplicationResult<bool>;
}

/// Receives every slug value the controller produces so the host form can
/// store it.
pub trait SlugChangeListener: Send + Sync {
    fn on_slug_change(&self, slug: &str);
}

impl<F> SlugChangeListener for F
where
    F: Fn(&str) + Send + Sync,
{
    fn on_slug_change(&self, slug: &str) {
        self(slug)
    }
}
