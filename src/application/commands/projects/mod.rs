// src/application/commands/projects/mod.rs
mod resolve;
mod service;

pub use resolve::ResolveProjectSlugCommand;
pub use service::ProjectSlugCommandService;
