pub mod errors;
pub mod project;
