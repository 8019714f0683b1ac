//! Platform timers for the verification driver and the class-session clock.

use dioxus::prelude::*;
use shared_types::{Clock, SessionEvent, SessionHandle, VerificationSession};
use std::time::Duration;

/// Sleep on the platform's timer: `setTimeout` in the browser, tokio
/// elsewhere.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// [`Clock`] backed by [`sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformClock;

impl Clock for PlatformClock {
    async fn sleep(&self, duration: Duration) {
        sleep(duration).await;
    }
}

/// A verification session living in a component signal, so every fired
/// transition re-renders the modal.
#[derive(Clone, Copy)]
pub struct SignalSession(pub Signal<VerificationSession>);

impl SessionHandle for SignalSession {
    fn next_wake(&self) -> Option<Duration> {
        self.0.read().next_wake()
    }

    fn fire(&mut self) -> Option<SessionEvent> {
        self.0.write().fire()
    }
}
