//! Simulated biometric verification.
//!
//! A [`VerificationSession`] is a small, deterministic state machine:
//!
//! ```text
//! idle --choose--> scanning --tick * n--> success --delay--> completed
//!                     |
//!                     +--mark_failed--> failed --retry--> idle
//! ```
//!
//! The session itself never sleeps. Waiting is delegated to a [`Clock`] by
//! [`drive`], which asks the session how long to wait next and fires the
//! scheduled transition afterwards. Dropping the `drive` future, or calling
//! [`VerificationSession::cancel`], stops every pending wait.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Progress value at which a scan is complete.
pub const PROGRESS_MAX: u8 = 100;

/// Biometric method picked in the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationMethod {
    Fingerprint,
    Face,
}

/// Methods in the order the chooser shows them.
pub const ALL_METHODS: &[VerificationMethod] =
    &[VerificationMethod::Fingerprint, VerificationMethod::Face];

impl VerificationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationMethod::Fingerprint => "fingerprint",
            VerificationMethod::Face => "face",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VerificationMethod::Fingerprint => "Fingerprint",
            VerificationMethod::Face => "Face Recognition",
        }
    }

    /// Short hint under the chooser button.
    pub fn hint(&self) -> &'static str {
        match self {
            VerificationMethod::Fingerprint => "Touch sensor",
            VerificationMethod::Face => "Look at camera",
        }
    }

    /// Instruction shown while scanning.
    pub fn prompt(&self) -> &'static str {
        match self {
            VerificationMethod::Fingerprint => "Place finger on sensor",
            VerificationMethod::Face => "Look directly at camera",
        }
    }

    pub fn failure_hint(&self) -> &'static str {
        match self {
            VerificationMethod::Fingerprint => {
                "Fingerprint not recognized. Please clean your finger and try again."
            }
            VerificationMethod::Face => {
                "Face not recognized. Please ensure good lighting and try again."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerificationStatus {
    #[default]
    Idle,
    Scanning,
    Success,
    Failed,
}

/// Cadence of the simulated scan, loaded from `[verification]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationTiming {
    /// Milliseconds between progress ticks.
    pub tick_ms: u64,
    /// Progress added per tick.
    pub step: u8,
    /// Milliseconds between reaching success and notifying the owner.
    pub completion_delay_ms: u64,
}

impl Default for VerificationTiming {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            step: 5,
            completion_delay_ms: 1500,
        }
    }
}

impl VerificationTiming {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }

    /// Number of ticks a scan takes to go from 0 to [`PROGRESS_MAX`].
    pub fn ticks_to_complete(&self) -> u32 {
        let step = u32::from(self.step.max(1));
        u32::from(PROGRESS_MAX).div_ceil(step)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::invalid_timing("tick_ms must be greater than 0"));
        }
        if self.step == 0 || self.step > PROGRESS_MAX {
            return Err(ConfigError::invalid_timing(format!(
                "step must be between 1 and {PROGRESS_MAX}, got {}",
                self.step
            )));
        }
        Ok(())
    }
}

/// Observable transition produced by a session operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Started(VerificationMethod),
    Progressed(u8),
    Succeeded,
    /// The owner's completion callback should run now. Emitted at most once.
    Completed,
    Failed,
    Reset,
}

/// State of one verification modal instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationSession {
    timing: VerificationTiming,
    method: Option<VerificationMethod>,
    status: VerificationStatus,
    progress: u8,
    notified: bool,
    cancelled: bool,
}

impl Default for VerificationSession {
    fn default() -> Self {
        Self::new(VerificationTiming::default())
    }
}

impl VerificationSession {
    pub fn new(timing: VerificationTiming) -> Self {
        Self {
            timing,
            method: None,
            status: VerificationStatus::Idle,
            progress: 0,
            notified: false,
            cancelled: false,
        }
    }

    pub fn timing(&self) -> VerificationTiming {
        self.timing
    }

    pub fn method(&self) -> Option<VerificationMethod> {
        self.method
    }

    pub fn status(&self) -> VerificationStatus {
        self.status
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// True once the completion event has been emitted.
    pub fn is_completed(&self) -> bool {
        self.notified
    }

    /// Start scanning with `method`. Only valid from `Idle`; otherwise a no-op.
    pub fn choose(&mut self, method: VerificationMethod) -> Option<SessionEvent> {
        if self.cancelled || self.status != VerificationStatus::Idle {
            return None;
        }
        self.method = Some(method);
        self.status = VerificationStatus::Scanning;
        self.progress = 0;
        Some(SessionEvent::Started(method))
    }

    /// Advance the scan by one step. Reaching [`PROGRESS_MAX`] moves to
    /// `Success` on the same tick.
    pub fn tick(&mut self) -> Option<SessionEvent> {
        if self.cancelled || self.status != VerificationStatus::Scanning {
            return None;
        }
        self.progress = self
            .progress
            .saturating_add(self.timing.step)
            .min(PROGRESS_MAX);
        if self.progress >= PROGRESS_MAX {
            self.status = VerificationStatus::Success;
            Some(SessionEvent::Succeeded)
        } else {
            Some(SessionEvent::Progressed(self.progress))
        }
    }

    /// Emit the completion event once the session has succeeded.
    pub fn complete(&mut self) -> Option<SessionEvent> {
        if self.cancelled || self.notified || self.status != VerificationStatus::Success {
            return None;
        }
        self.notified = true;
        Some(SessionEvent::Completed)
    }

    /// Move a running scan to `Failed`. The automatic flow never calls this.
    pub fn mark_failed(&mut self) -> Option<SessionEvent> {
        if self.cancelled || self.status != VerificationStatus::Scanning {
            return None;
        }
        self.status = VerificationStatus::Failed;
        Some(SessionEvent::Failed)
    }

    /// `Failed -> Idle`, clearing method and progress.
    pub fn retry(&mut self) -> Option<SessionEvent> {
        if self.cancelled || self.status != VerificationStatus::Failed {
            return None;
        }
        self.method = None;
        self.status = VerificationStatus::Idle;
        self.progress = 0;
        Some(SessionEvent::Reset)
    }

    /// Stop the session for good. Returns `true` if it was still live, in
    /// which case the owner should run its cancel callback.
    pub fn cancel(&mut self) -> bool {
        if self.cancelled || self.notified {
            return false;
        }
        self.cancelled = true;
        true
    }

    /// How long to wait before the next scheduled transition, if any.
    pub fn next_wake(&self) -> Option<Duration> {
        if self.cancelled {
            return None;
        }
        match self.status {
            VerificationStatus::Scanning => Some(self.timing.tick()),
            VerificationStatus::Success if !self.notified => Some(self.timing.completion_delay()),
            _ => None,
        }
    }

    /// Run the transition scheduled by [`next_wake`](Self::next_wake).
    pub fn fire(&mut self) -> Option<SessionEvent> {
        match self.status {
            VerificationStatus::Scanning => self.tick(),
            VerificationStatus::Success => self.complete(),
            _ => None,
        }
    }

    /// Card description for the current status.
    pub fn description(&self) -> String {
        match (self.status, self.method) {
            (VerificationStatus::Idle, _) => "Choose your preferred verification method".into(),
            (VerificationStatus::Scanning, Some(m)) => format!("Scanning {}...", m.as_str()),
            (VerificationStatus::Scanning, None) => "Scanning...".into(),
            (VerificationStatus::Success, _) => "Verification successful!".into(),
            (VerificationStatus::Failed, _) => "Verification failed. Please try again.".into(),
        }
    }
}

/// Source of the waits between scheduled transitions.
pub trait Clock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// A session reachable through some owner: a plain value, a signal, a cell.
pub trait SessionHandle {
    fn next_wake(&self) -> Option<Duration>;
    fn fire(&mut self) -> Option<SessionEvent>;
}

impl SessionHandle for VerificationSession {
    fn next_wake(&self) -> Option<Duration> {
        VerificationSession::next_wake(self)
    }

    fn fire(&mut self) -> Option<SessionEvent> {
        VerificationSession::fire(self)
    }
}

/// Run a session's scheduled transitions until nothing is left to wait for.
///
/// Every event is passed to `on_event`. Returns `true` if the session
/// completed; `false` if it was cancelled or left the timed states.
pub async fn drive<C, H, F>(clock: &C, session: &mut H, mut on_event: F) -> bool
where
    C: Clock,
    H: SessionHandle,
    F: FnMut(SessionEvent),
{
    while let Some(wait) = session.next_wake() {
        clock.sleep(wait).await;
        match session.fire() {
            Some(SessionEvent::Completed) => {
                on_event(SessionEvent::Completed);
                return true;
            }
            Some(event) => on_event(event),
            None => {}
        }
    }
    false
}
