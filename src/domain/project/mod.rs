pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::Project;
pub use repository::ProjectReadRepository;
pub use value_objects::{ProjectId, ProjectSlug, ProjectTitle, is_canonical_slug};
