// src/application/queries/projects/mod.rs
mod checker;
mod service;
mod slug_availability;

pub use checker::RepositorySlugAvailabilityChecker;
pub use service::ProjectSlugQueryService;
pub use slug_availability::{CheckSlugAvailabilityQuery, PreviewSlugQuery};
