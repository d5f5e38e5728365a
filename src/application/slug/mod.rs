//! Live slug field state for the project create/edit form.
mod availability;
mod controller;

pub use availability::{SlugAvailability, SlugFieldSnapshot};
pub use controller::{DEFAULT_DEBOUNCE, SlugAvailabilityController, SlugAvailabilityControllerBuilder};
