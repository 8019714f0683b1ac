use std::time::Duration;

/// A teacher's live class session: on/off plus elapsed time since start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassSession {
    active: bool,
    elapsed: Duration,
}

impl ClassSession {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Start or end the session. Starting resets the elapsed time.
    /// Returns the new active state.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        if self.active {
            self.elapsed = Duration::ZERO;
        }
        self.active
    }

    /// Add `by` to the elapsed time. Ignored while inactive.
    pub fn advance(&mut self, by: Duration) {
        if self.active {
            self.elapsed += by;
        }
    }

    /// Elapsed time as `MM:SS`, or `H:MM:SS` past the first hour.
    pub fn elapsed_label(&self) -> String {
        let total = self.elapsed.as_secs();
        let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
        if hours > 0 {
            format!("{hours}:{minutes:02}:{seconds:02}")
        } else {
            format!("{minutes:02}:{seconds:02}")
        }
    }
}
