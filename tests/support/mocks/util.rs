// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};
use std::sync::Mutex;

#[derive(Clone)]
pub struct DummyClock;

impl folio_core::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

/// Collects every slug emitted by a slug field controller.
#[derive(Default)]
pub struct RecordingListener {
    emitted: Mutex<Vec<String>>,
}

impl RecordingListener {
    pub fn emitted(&self) -> Vec<String> {
        self.emitted.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.emitted.lock().unwrap().last().cloned()
    }
}

impl folio_core::application::ports::availability::SlugChangeListener for RecordingListener {
    fn on_slug_change(&self, slug: &str) {
        self.emitted.lock().unwrap().push(slug.to_string());
    }
}
