// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Canonicalize free text into a slug. Never fails; may return an empty string.
    fn slugify(&self, input: &str) -> String;
}
