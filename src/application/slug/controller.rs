// src/application/slug/controller.rs
use super::availability::{SlugAvailability, SlugFieldSnapshot};
use crate::application::ports::{
    SlugAvailabilityCheckerPort, SlugChangeListenerPort, SlugGeneratorPort,
};
use crate::domain::project::ProjectId;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::{runtime::Handle, sync::watch, task::JoinHandle};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
struct CheckedSlug {
    slug: String,
    available: bool,
}

struct PendingCheck {
    token: u64,
    handle: JoinHandle<()>,
}

struct FieldState {
    entity_id: Option<ProjectId>,
    candidate: String,
    is_customized: bool,
    availability: SlugAvailability,
    last_checked: Option<CheckedSlug>,
    pending: Option<PendingCheck>,
    next_token: u64,
    alive: bool,
}

impl FieldState {
    fn new(entity_id: Option<ProjectId>) -> Self {
        Self {
            entity_id,
            candidate: String::new(),
            is_customized: false,
            availability: SlugAvailability::Unknown,
            last_checked: None,
            pending: None,
            next_token: 0,
            alive: true,
        }
    }

    fn snapshot(&self) -> SlugFieldSnapshot {
        SlugFieldSnapshot {
            slug: self.candidate.clone(),
            availability: self.availability,
            is_customized: self.is_customized,
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
        }
    }
}

struct Shared {
    state: Mutex<FieldState>,
    checker: Option<Arc<SlugAvailabilityCheckerPort>>,
    status: watch::Sender<SlugFieldSnapshot>,
    debounce: Duration,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, FieldState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &FieldState) {
        self.status.send_replace(state.snapshot());
    }

    /// Re-evaluates availability for the current candidate. Any timer that has
    /// not fired yet is dropped first; at most one is ever pending. Until the
    /// new check resolves the previous result no longer applies.
    fn refresh_availability(self: &Arc<Self>, state: &mut FieldState) {
        state.cancel_pending();
        state.availability = SlugAvailability::Unknown;

        if state.candidate.is_empty() || self.checker.is_none() {
            return;
        }

        let cached = state
            .last_checked
            .as_ref()
            .filter(|checked| checked.slug == state.candidate)
            .map(|checked| checked.available);
        if let Some(available) = cached {
            state.availability = SlugAvailability::from_check(available);
            return;
        }

        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!(
                slug = %state.candidate,
                "no async runtime available; skipping slug availability check"
            );
            return;
        };

        state.next_token += 1;
        let token = state.next_token;
        let handle = runtime.spawn(run_check(Arc::clone(self), token));
        state.pending = Some(PendingCheck { token, handle });
    }

    fn replace_candidate(self: &Arc<Self>, state: &mut FieldState, candidate: String) {
        state.candidate = candidate;
        self.refresh_availability(state);
    }
}

async fn run_check(shared: Arc<Shared>, token: u64) {
    tokio::time::sleep(shared.debounce).await;

    let (candidate, entity_id) = {
        let mut state = shared.lock();
        if !state.alive || state.pending.as_ref().map(|p| p.token) != Some(token) {
            return;
        }
        state.pending = None;
        state.availability = SlugAvailability::Checking;
        shared.publish(&state);
        (state.candidate.clone(), state.entity_id)
    };

    let Some(checker) = shared.checker.as_ref() else {
        return;
    };

    tracing::debug!(slug = %candidate, "checking slug availability");
    let outcome = checker.is_available(&candidate, entity_id).await;

    let mut state = shared.lock();
    if !state.alive {
        tracing::debug!(slug = %candidate, "slug field disposed; dropping availability result");
        return;
    }
    if state.candidate != candidate || state.entity_id != entity_id {
        tracing::debug!(
            checked = %candidate,
            current = %state.candidate,
            "discarding stale slug availability result"
        );
        return;
    }

    match outcome {
        Ok(available) => {
            state.availability = SlugAvailability::from_check(available);
            state.last_checked = Some(CheckedSlug {
                slug: candidate,
                available,
            });
        }
        Err(err) => {
            tracing::warn!(slug = %candidate, error = %err, "slug availability check failed");
            state.availability = SlugAvailability::Unknown;
        }
    }
    shared.publish(&state);
}

/// Drives the slug field of one project create/edit session.
///
/// The slug follows the title until the user edits it directly. Every change
/// of the slug is reported to the [`SlugChangeListener`] and, after a quiet
/// period, checked against the [`SlugAvailabilityChecker`]. Results that
/// arrive for a slug the user has already moved away from are discarded.
///
/// Checks are spawned on the ambient Tokio runtime, so the mutating methods
/// should be called from within one; outside a runtime availability stays
/// [`SlugAvailability::Unknown`].
///
/// [`SlugChangeListener`]: crate::application::ports::availability::SlugChangeListener
/// [`SlugAvailabilityChecker`]: crate::application::ports::availability::SlugAvailabilityChecker
pub struct SlugAvailabilityController {
    shared: Arc<Shared>,
    generator: Arc<SlugGeneratorPort>,
    listener: Arc<SlugChangeListenerPort>,
}

impl SlugAvailabilityController {
    pub fn builder(
        generator: Arc<SlugGeneratorPort>,
        listener: Arc<SlugChangeListenerPort>,
    ) -> SlugAvailabilityControllerBuilder {
        SlugAvailabilityControllerBuilder {
            generator,
            listener,
            checker: None,
            entity_id: None,
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    /// Title field changed. Ignored once the slug has been customized, and
    /// when the derived slug equals the current one.
    pub fn on_title_changed(&self, title: &str) {
        let derived = self.generator.slugify(title);
        {
            let mut state = self.shared.lock();
            if !state.alive || state.is_customized || state.candidate == derived {
                return;
            }
            self.shared.replace_candidate(&mut state, derived.clone());
            self.shared.publish(&state);
        }
        self.listener.on_slug_change(&derived);
    }

    /// Slug field edited by hand. The input is canonicalized and the field
    /// stops following the title.
    pub fn on_slug_edited(&self, raw: &str) {
        let derived = self.generator.slugify(raw);
        self.commit(derived, true);
    }

    /// "Generate from title": back to auto mode, whatever was typed before.
    pub fn regenerate_from_title(&self, title: &str) {
        let derived = self.generator.slugify(title);
        self.commit(derived, false);
    }

    /// The form now edits a different record. Clears the customization flag
    /// and the cached check, and re-checks the current slug if there is one.
    pub fn reset_for_new_entity(&self) {
        let mut state = self.shared.lock();
        if !state.alive {
            return;
        }
        state.is_customized = false;
        state.last_checked = None;
        self.shared.refresh_availability(&mut state);
        self.shared.publish(&state);
    }

    /// Loads a record into the form. `project_id` is the record whose own slug
    /// counts as available (`None` for a record not saved yet).
    ///
    /// A record with a slug keeps it until the user regenerates; a fresh
    /// record starts empty and follows its title. The listener already holds
    /// the stored value and is only told when canonicalization changed it.
    pub fn bind_entity(&self, project_id: Option<ProjectId>, existing_slug: Option<&str>) {
        let stored = existing_slug.map(str::trim).unwrap_or_default();
        let slug = self.generator.slugify(stored);
        {
            let mut state = self.shared.lock();
            if !state.alive {
                return;
            }
            state.entity_id = project_id;
            state.is_customized = !slug.is_empty();
            state.last_checked = None;
            self.shared.replace_candidate(&mut state, slug.clone());
            self.shared.publish(&state);
        }
        if slug != stored {
            self.listener.on_slug_change(&slug);
        }
    }

    /// Stops all pending work. Later method calls and late check results are
    /// ignored.
    pub fn dispose(&self) {
        let mut state = self.shared.lock();
        if state.alive {
            state.alive = false;
            state.cancel_pending();
            tracing::debug!(slug = %state.candidate, "slug field disposed");
        }
    }

    pub fn slug(&self) -> String {
        self.shared.lock().candidate.clone()
    }

    pub fn availability(&self) -> SlugAvailability {
        self.shared.lock().availability
    }

    pub fn is_checking(&self) -> bool {
        self.availability() == SlugAvailability::Checking
    }

    pub fn is_customized(&self) -> bool {
        self.shared.lock().is_customized
    }

    pub fn snapshot(&self) -> SlugFieldSnapshot {
        self.shared.lock().snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<SlugFieldSnapshot> {
        self.shared.status.subscribe()
    }

    fn commit(&self, slug: String, customized: bool) {
        {
            let mut state = self.shared.lock();
            if !state.alive {
                return;
            }
            state.is_customized = customized;
            if state.candidate != slug {
                self.shared.replace_candidate(&mut state, slug.clone());
            }
            self.shared.publish(&state);
        }
        self.listener.on_slug_change(&slug);
    }
}

impl Drop for SlugAvailabilityController {
    fn drop(&mut self) {
        self.dispose();
    }
}

pub struct SlugAvailabilityControllerBuilder {
    generator: Arc<SlugGeneratorPort>,
    listener: Arc<SlugChangeListenerPort>,
    checker: Option<Arc<SlugAvailabilityCheckerPort>>,
    entity_id: Option<ProjectId>,
    debounce: Duration,
}

impl SlugAvailabilityControllerBuilder {
    pub fn checker(mut self, checker: Arc<SlugAvailabilityCheckerPort>) -> Self {
        self.checker = Some(checker);
        self
    }

    /// Record initially edited by the form.
    pub fn entity(mut self, entity_id: Option<ProjectId>) -> Self {
        self.entity_id = entity_id;
        self
    }

    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn build(self) -> SlugAvailabilityController {
        let state = FieldState::new(self.entity_id);
        let (status, _) = watch::channel(state.snapshot());
        SlugAvailabilityController {
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                checker: self.checker,
                status,
                debounce: self.debounce,
            }),
            generator: self.generator,
            listener: self.listener,
        }
    }
}
