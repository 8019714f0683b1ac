use pretty_assertions::assert_eq;
use shared_types::{
    drive, SessionEvent, VerificationMethod, VerificationSession, VerificationStatus,
    VerificationTiming, PROGRESS_MAX,
};

use crate::common::{ms, scanning_session, EventLog, TokioClock};

#[tokio::test(start_paused = true)]
async fn fingerprint_scan_succeeds_after_twenty_ticks_then_completes() {
    let mut session = scanning_session(VerificationMethod::Fingerprint);
    let log = EventLog::new();

    let completed = drive(&TokioClock, &mut session, log.recorder()).await;

    assert!(completed);
    assert_eq!(session.status(), VerificationStatus::Success);
    assert_eq!(session.progress(), PROGRESS_MAX);
    assert!(session.is_completed());

    // 19 intermediate ticks, the 20th lands on 100 and succeeds.
    assert_eq!(log.count(|e| matches!(e, SessionEvent::Progressed(_))), 19);
    assert_eq!(log.time_of(SessionEvent::Succeeded), Some(ms(2000)));
    assert_eq!(log.time_of(SessionEvent::Completed), Some(ms(3500)));
    assert_eq!(log.count(|e| *e == SessionEvent::Completed), 1);
}

#[tokio::test(start_paused = true)]
async fn face_scan_follows_the_same_timeline() {
    let mut session = scanning_session(VerificationMethod::Face);
    let log = EventLog::new();

    assert!(drive(&TokioClock, &mut session, log.recorder()).await);
    assert_eq!(session.method(), Some(VerificationMethod::Face));
    assert_eq!(log.time_of(SessionEvent::Completed), Some(ms(3500)));
}

#[tokio::test(start_paused = true)]
async fn progress_is_monotonic_and_never_exceeds_max() {
    let mut session = scanning_session(VerificationMethod::Fingerprint);
    let log = EventLog::new();

    drive(&TokioClock, &mut session, log.recorder()).await;

    let values = log.progress_values();
    assert_eq!(values.first(), Some(&5));
    assert_eq!(values.last(), Some(&95));
    assert!(values.windows(2).all(|w| w[0] < w[1]), "{values:?}");
    assert!(values.iter().all(|p| *p <= PROGRESS_MAX));
}

#[tokio::test(start_paused = true)]
async fn ticks_arrive_on_a_fixed_cadence() {
    let mut session = scanning_session(VerificationMethod::Fingerprint);
    let log = EventLog::new();

    drive(&TokioClock, &mut session, log.recorder()).await;

    let events = log.events();
    for (i, (at, event)) in events.iter().take(19).enumerate() {
        let n = i as u64 + 1;
        assert_eq!(*at, ms(100 * n));
        assert_eq!(*event, SessionEvent::Progressed((5 * n) as u8));
    }
}

#[tokio::test(start_paused = true)]
async fn nothing_fires_after_completion() {
    let mut session = scanning_session(VerificationMethod::Fingerprint);
    let log = EventLog::new();

    drive(&TokioClock, &mut session, log.recorder()).await;
    let before = log.events().len();

    // A second drive has nothing left to wait for.
    assert!(!drive(&TokioClock, &mut session, log.recorder()).await);
    tokio::time::sleep(ms(10_000)).await;

    assert_eq!(log.events().len(), before);
    assert_eq!(session.next_wake(), None);
}

#[tokio::test(start_paused = true)]
async fn idle_session_has_nothing_to_drive() {
    let mut session = VerificationSession::default();
    let log = EventLog::new();

    assert!(!drive(&TokioClock, &mut session, log.recorder()).await);
    assert!(log.events().is_empty());
    assert_eq!(session.status(), VerificationStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn custom_timing_caps_the_last_step() {
    let timing = VerificationTiming {
        tick_ms: 50,
        step: 30,
        completion_delay_ms: 200,
    };
    let mut session = VerificationSession::new(timing);
    session.choose(VerificationMethod::Face);
    let log = EventLog::new();

    assert!(drive(&TokioClock, &mut session, log.recorder()).await);

    assert_eq!(timing.ticks_to_complete(), 4);
    assert_eq!(log.progress_values(), vec![30, 60, 90]);
    assert_eq!(log.time_of(SessionEvent::Succeeded), Some(ms(200)));
    assert_eq!(log.time_of(SessionEvent::Completed), Some(ms(400)));
    assert_eq!(session.progress(), PROGRESS_MAX);
}

#[tokio::test(start_paused = true)]
async fn choosing_again_while_scanning_keeps_the_first_method() {
    let mut session = scanning_session(VerificationMethod::Fingerprint);

    assert_eq!(session.choose(VerificationMethod::Face), None);
    assert!(drive(&TokioClock, &mut session, |_| {}).await);
    assert_eq!(session.method(), Some(VerificationMethod::Fingerprint));
}

#[tokio::test(start_paused = true)]
async fn failed_scan_stops_and_retry_starts_over() {
    let mut session = scanning_session(VerificationMethod::Fingerprint);
    session.tick();
    session.tick();
    assert_eq!(session.mark_failed(), Some(SessionEvent::Failed));

    // Failed is not a timed state.
    assert!(!drive(&TokioClock, &mut session, |_| {}).await);
    assert_eq!(session.progress(), 10);

    assert_eq!(session.retry(), Some(SessionEvent::Reset));
    assert_eq!(session.status(), VerificationStatus::Idle);
    assert_eq!(session.method(), None);
    assert_eq!(session.progress(), 0);

    session.choose(VerificationMethod::Face);
    let log = EventLog::new();
    assert!(drive(&TokioClock, &mut session, log.recorder()).await);
    assert_eq!(log.time_of(SessionEvent::Completed), Some(ms(3500)));
}
