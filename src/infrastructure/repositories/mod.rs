// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_project;

pub use error::map_sqlx;
pub use postgres_project::PostgresProjectRepository;
