use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct AppState {
    started_at: Instant,
}

impl AppState {
    /// Captures the process start instant; build this once at boot.
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
