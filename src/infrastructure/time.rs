// src/infrastructure/time.rs
use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_timestamp_tracks_now() {
        let clock = SystemClock;
        let before = Utc::now().timestamp();
        let ts = clock.unix_timestamp();
        assert!(ts >= before);
        assert!(ts <= Utc::now().timestamp());
    }
}
