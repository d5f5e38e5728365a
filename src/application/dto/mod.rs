pub mod projects;

pub use projects::{ResolvedSlugDto, SlugAvailabilityDto, SlugPreviewDto};
