use pretty_assertions::assert_eq;
use shared_types::{
    drive, SessionEvent, VerificationMethod, VerificationSession, VerificationStatus,
};

use crate::common::{ms, scanning_session, EventLog, SharedSession, TokioClock};

#[tokio::test(start_paused = true)]
async fn cancel_mid_scan_stops_ticking_and_never_completes() {
    let shared = SharedSession::new(scanning_session(VerificationMethod::Fingerprint));
    let log = EventLog::new();
    let mut handle = shared.clone();

    let (completed, cancelled) = tokio::join!(
        drive(&TokioClock, &mut handle, log.recorder()),
        async {
            tokio::time::sleep(ms(550)).await;
            shared.with(|s| s.cancel())
        }
    );

    assert!(!completed);
    assert!(cancelled, "a live session reports the cancel");

    // Ticks at 100..=500 ran; the one due at 600 found the session cancelled.
    assert_eq!(log.progress_values(), vec![5, 10, 15, 20, 25]);
    assert!(log.events().iter().all(|(at, _)| *at < ms(550)));
    assert_eq!(log.time_of(SessionEvent::Completed), None);

    let session = shared.snapshot();
    assert_eq!(session.progress(), 25);
    assert_eq!(session.status(), VerificationStatus::Scanning);
    assert_eq!(session.next_wake(), None);
}

#[tokio::test(start_paused = true)]
async fn cancel_during_completion_delay_suppresses_the_callback() {
    let shared = SharedSession::new(scanning_session(VerificationMethod::Face));
    let log = EventLog::new();
    let mut handle = shared.clone();

    let (completed, cancelled) = tokio::join!(
        drive(&TokioClock, &mut handle, log.recorder()),
        async {
            // Success lands at 2000; completion would follow at 3500.
            tokio::time::sleep(ms(2700)).await;
            shared.with(|s| s.cancel())
        }
    );

    assert!(!completed);
    assert!(cancelled);
    assert_eq!(log.time_of(SessionEvent::Succeeded), Some(ms(2000)));
    assert_eq!(log.time_of(SessionEvent::Completed), None);
    assert!(!shared.snapshot().is_completed());
}

#[tokio::test(start_paused = true)]
async fn cancel_while_idle_ends_the_session() {
    let mut session = VerificationSession::default();

    assert!(session.cancel());
    assert!(session.is_cancelled());
    // The modal is gone; a late click on a method does nothing.
    assert_eq!(session.choose(VerificationMethod::Fingerprint), None);
    assert!(!drive(&TokioClock, &mut session, |_| {}).await);
}

#[test]
fn cancel_is_reported_once() {
    let mut session = scanning_session(VerificationMethod::Fingerprint);

    assert!(session.cancel());
    assert!(!session.cancel());
    assert_eq!(session.tick(), None);
}

#[tokio::test(start_paused = true)]
async fn cancel_after_completion_is_refused() {
    let mut session = scanning_session(VerificationMethod::Fingerprint);
    assert!(drive(&TokioClock, &mut session, |_| {}).await);

    // The owner already got on_success, so on_cancel must not follow.
    assert!(!session.cancel());
    assert!(session.is_completed());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_driver_stops_all_pending_waits() {
    let mut session = scanning_session(VerificationMethod::Fingerprint);
    let log = EventLog::new();

    let result = tokio::time::timeout(
        ms(1050),
        drive(&TokioClock, &mut session, log.recorder()),
    )
    .await;
    assert!(result.is_err(), "driver should still have been running");
    assert_eq!(session.progress(), 50);

    // Unmounted: no timer keeps running against the dropped future.
    tokio::time::sleep(ms(10_000)).await;
    assert_eq!(session.progress(), 50);
    assert_eq!(log.progress_values().len(), 10);
    assert_eq!(log.time_of(SessionEvent::Completed), None);
}
