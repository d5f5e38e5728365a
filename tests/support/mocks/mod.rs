// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod project_repo;
pub mod time;
pub mod util;

pub use project_repo::{FailingProjectRepo, InMemoryProjectRepo};
pub use time::fixed_now;
pub use util::{DummyClock, RecordingListener};
