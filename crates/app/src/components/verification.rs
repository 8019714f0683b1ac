use crate::clock::{PlatformClock, SignalSession};
use crate::config::config;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCamera, LdCircleCheck, LdEye, LdFingerprint, LdScan, LdShield, LdTriangleAlert,
};
use dioxus_free_icons::Icon;
use shared_types::{
    drive, Clock, SessionEvent, SessionHandle, VerificationMethod, VerificationSession,
    VerificationStatus, ALL_METHODS,
};
use shared_ui::{
    Button, ButtonSize, ButtonVariant, DialogDescription, DialogTitle, Modal, ProgressBar,
};

/// Simulated biometric check shown over the student dashboard.
///
/// Mounting the component opens a fresh session. `on_success` fires once the
/// scan has finished and the completion delay has passed; `on_cancel` fires
/// when the user closes the modal first. Each fires at most once, and never
/// both.
#[component]
pub fn BiometricVerification(on_success: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let mut session = use_signal(|| VerificationSession::new(config().verification));
    let mut driver = use_signal(|| Option::<Task>::None);

    let mut start = move |method: VerificationMethod| {
        let started = session.write().choose(method);
        if started.is_none() {
            return;
        }
        tracing::info!(method = method.as_str(), "verification started");
        let task = spawn(async move {
            let mut handle = SignalSession(session);
            run_scan(&PlatformClock, &mut handle, || on_success.call(())).await;
        });
        driver.set(Some(task));
    };

    let cancel = move |_: ()| {
        let stop_driver = || {
            if let Some(task) = driver.write().take() {
                task.cancel();
            }
        };
        let live = close(&mut session.write(), stop_driver);
        if live {
            tracing::info!("verification cancelled");
            on_cancel.call(());
        }
    };

    let retry = move |_: MouseEvent| {
        if session.write().retry().is_some() {
            tracing::info!("verification reset");
        }
    };

    let current = session.read().clone();
    let progress = current.progress();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./verification.css") }

        Modal { on_dismiss: cancel,
            div { class: "verify-header",
                div { class: "verify-badge",
                    Icon::<LdShield> { icon: LdShield, width: 32, height: 32 }
                }
                DialogTitle { "Biometric Verification" }
                DialogDescription { {current.description()} }
            }

            div { class: "verify-body",
                match current.status() {
                    VerificationStatus::Idle => rsx! {
                        div { class: "verify-methods",
                            {ALL_METHODS.iter().copied().map(|method| {
                                let key = method.as_str();
                                rsx! {
                                    Button {
                                        key: "{key}",
                                        variant: ButtonVariant::Outline,
                                        size: ButtonSize::Tile,
                                        onclick: move |_| start(method),
                                        span { class: "verify-method-icon", "data-method": key,
                                            {method_icon(method)}
                                        }
                                        span { class: "verify-method-label", {method.label()} }
                                        span { class: "verify-method-hint", {method.hint()} }
                                    }
                                }
                            })}
                        }
                        div { class: "verify-notice",
                            div { class: "verify-notice-title",
                                Icon::<LdShield> { icon: LdShield, width: 20, height: 20 }
                                span { "Secure & Encrypted" }
                            }
                            p {
                                "Your biometric data is encrypted and stored securely. It cannot be used for any purpose other than attendance verification."
                            }
                        }
                    },
                    VerificationStatus::Scanning => rsx! {
                        div { class: "verify-scanning",
                            div { class: "verify-ring",
                                {current.method().map(scanning_icon)}
                            }
                            div { class: "verify-prompt",
                                Icon::<LdScan> { icon: LdScan, width: 16, height: 16 }
                                span { {current.method().map(|m| m.prompt())} }
                            }
                            ProgressBar { value: f64::from(progress) }
                            p { class: "verify-percent", "{progress}% Complete" }
                        }
                    },
                    VerificationStatus::Success => rsx! {
                        div { class: "verify-result", "data-outcome": "success",
                            div { class: "verify-result-icon",
                                Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 48, height: 48 }
                            }
                            h3 { "Verification Successful!" }
                            p { "Attendance has been marked" }
                        }
                    },
                    VerificationStatus::Failed => rsx! {
                        div { class: "verify-result", "data-outcome": "failed",
                            div { class: "verify-result-icon",
                                Icon::<LdTriangleAlert> { icon: LdTriangleAlert, width: 48, height: 48 }
                            }
                            h3 { "Verification Failed" }
                            p { {current.method().map(|m| m.failure_hint())} }
                            Button { variant: ButtonVariant::Outline, onclick: retry, "Try Again" }
                        }
                    },
                }
            }
        }
    }
}

/// Drive a started session to the end and tell the owner if it completed.
async fn run_scan<C, H>(clock: &C, handle: &mut H, on_success: impl FnOnce()) -> bool
where
    C: Clock,
    H: SessionHandle,
{
    let completed = drive(clock, handle, log_event).await;
    if completed {
        on_success();
    }
    completed
}

/// Close the modal on the user's behalf. Stops the driver and returns `true`
/// only while the session is still live; a finished or already closed
/// session is left alone so the owner never hears both outcomes.
fn close(session: &mut VerificationSession, stop_driver: impl FnOnce()) -> bool {
    if !session.cancel() {
        return false;
    }
    stop_driver();
    true
}

fn log_event(event: SessionEvent) {
    match event {
        SessionEvent::Progressed(progress) => tracing::debug!(progress, "scan progressed"),
        SessionEvent::Succeeded => tracing::info!("scan succeeded"),
        SessionEvent::Completed => tracing::info!("verification completed"),
        other => tracing::debug!(?other, "verification event"),
    }
}

fn method_icon(method: VerificationMethod) -> Element {
    match method {
        VerificationMethod::Fingerprint => rsx! {
            Icon::<LdFingerprint> { icon: LdFingerprint, width: 48, height: 48 }
        },
        VerificationMethod::Face => rsx! {
            Icon::<LdCamera> { icon: LdCamera, width: 48, height: 48 }
        },
    }
}

fn scanning_icon(method: VerificationMethod) -> Element {
    match method {
        VerificationMethod::Fingerprint => rsx! {
            span { class: "verify-pulse", "data-method": "fingerprint",
                Icon::<LdFingerprint> { icon: LdFingerprint, width: 64, height: 64 }
            }
        },
        VerificationMethod::Face => rsx! {
            span { class: "verify-pulse", "data-method": "face",
                Icon::<LdEye> { icon: LdEye, width: 64, height: 64 }
            }
        },
    }
}
