use shared_types::{
    Clock, SessionEvent, SessionHandle, VerificationMethod, VerificationSession,
    VerificationTiming,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tokio::time::Instant;

/// Clock on tokio's timer. Under `#[tokio::test(start_paused = true)]` every
/// wait resolves instantly in virtual time, so timings can be asserted exactly.
pub struct TokioClock;

impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// A session shared between the driver and the test body, the way the modal
/// shares it between its timer task and its close button.
#[derive(Clone, Default)]
pub struct SharedSession(Rc<RefCell<VerificationSession>>);

impl SharedSession {
    pub fn new(session: VerificationSession) -> Self {
        Self(Rc::new(RefCell::new(session)))
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut VerificationSession) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }

    pub fn snapshot(&self) -> VerificationSession {
        self.0.borrow().clone()
    }
}

impl SessionHandle for SharedSession {
    fn next_wake(&self) -> Option<Duration> {
        self.0.borrow().next_wake()
    }

    fn fire(&mut self) -> Option<SessionEvent> {
        self.0.borrow_mut().fire()
    }
}

/// Every event the driver reported, stamped with the virtual time since the
/// log was created.
#[derive(Clone)]
pub struct EventLog {
    start: Instant,
    events: Rc<RefCell<Vec<(Duration, SessionEvent)>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Callback to hand to `drive`.
    pub fn recorder(&self) -> impl FnMut(SessionEvent) {
        let log = self.clone();
        move |event| {
            log.events
                .borrow_mut()
                .push((log.start.elapsed(), event));
        }
    }

    pub fn events(&self) -> Vec<(Duration, SessionEvent)> {
        self.events.borrow().clone()
    }

    /// When `event` was first seen, if ever.
    pub fn time_of(&self, event: SessionEvent) -> Option<Duration> {
        self.events
            .borrow()
            .iter()
            .find(|(_, e)| *e == event)
            .map(|(at, _)| *at)
    }

    pub fn count(&self, pred: impl Fn(&SessionEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|(_, e)| pred(e)).count()
    }

    /// Progress values reported by `Progressed` events, in order.
    pub fn progress_values(&self) -> Vec<u8> {
        self.events
            .borrow()
            .iter()
            .filter_map(|(_, e)| match e {
                SessionEvent::Progressed(p) => Some(*p),
                _ => None,
            })
            .collect()
    }
}

/// A session with the default timing that has already started scanning.
pub fn scanning_session(method: VerificationMethod) -> VerificationSession {
    let mut session = VerificationSession::new(VerificationTiming::default());
    assert_eq!(
        session.choose(method),
        Some(SessionEvent::Started(method))
    );
    session
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}
