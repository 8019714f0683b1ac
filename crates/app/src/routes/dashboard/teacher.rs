use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdCalendar, LdClock, LdFileText, LdPause, LdPlay, LdTriangleAlert,
    LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{AtRiskStudent, CheckIn, ClassSession, ClassSlot, ClassStatus};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, PageHeader, PageSubtitle, PageTitle, ProgressBar,
};
use std::time::Duration;

use super::{HeaderButton, LogoutButton, QuickAction, QuickActions};
use crate::clock::sleep;
use crate::config::config;
use crate::format_helpers::format_percent;

/// Resolution of the live session clock.
const SESSION_TICK: Duration = Duration::from_secs(1);

#[component]
pub fn TeacherDashboard() -> Element {
    let teacher = &config().fixtures.teacher;
    let mut session = use_signal(ClassSession::default);
    let mut ticker = use_signal(|| Option::<Task>::None);

    // Starting a session resets the clock and spawns a ticker; ending it
    // cancels the ticker. The ticker dies with the dashboard on logout.
    let toggle = move |_: ()| {
        let active = session.write().toggle();
        if let Some(task) = ticker.write().take() {
            task.cancel();
        }
        if active {
            tracing::info!("class session started");
            let task = spawn(async move {
                loop {
                    sleep(SESSION_TICK).await;
                    session.write().advance(SESSION_TICK);
                }
            });
            ticker.set(Some(task));
        } else {
            tracing::info!(elapsed = %session.read().elapsed_label(), "class session ended");
        }
    };

    let active = session.read().is_active();
    let elapsed = session.read().elapsed_label();
    let feed_class = teacher
        .active_class()
        .map(|c| c.name.clone())
        .unwrap_or_default();

    rsx! {
        PageHeader {
            icon: rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 24, height: 24 } },
            actions: rsx! {
                if active {
                    Badge { class: "session-badge", variant: BadgeVariant::Success,
                        span { class: "session-dot" }
                        "Session Active"
                    }
                }
                HeaderButton {
                    icon: rsx! { Icon::<LdBell> { icon: LdBell, width: 16, height: 16 } },
                    label: "Alerts",
                }
                LogoutButton {}
            },
            PageTitle { "Teacher Dashboard" }
            PageSubtitle { "{teacher.name} - {teacher.department}" }
        }

        main { class: "dashboard-body",
            section { class: "class-list",
                h2 { class: "section-title", "Today's Classes" }
                for slot in teacher.classes.iter() {
                    ClassCard {
                        key: "{slot.id}",
                        slot: slot.clone(),
                        session_active: active,
                        elapsed: elapsed.clone(),
                        on_toggle: toggle,
                    }
                }
            }

            div { class: "dashboard-columns",
                Card {
                    CardHeader {
                        CardTitle { class: "card-title-icon",
                            Icon::<LdUserCheck> { icon: LdUserCheck, width: 20, height: 20 }
                            "Live Attendance Feed"
                        }
                        CardDescription { "Recent check-ins for {feed_class}" }
                    }
                    CardContent {
                        if active {
                            div { class: "feed-list",
                                for check_in in teacher.check_ins.iter() {
                                    CheckInRow { key: "{check_in.id}", check_in: check_in.clone() }
                                }
                                p { class: "feed-waiting", "Waiting for more students to check in..." }
                            }
                        } else {
                            div { class: "feed-empty",
                                Icon::<LdClock> { icon: LdClock, width: 48, height: 48 }
                                p { "No active session" }
                                p { class: "feed-empty-hint", "Start a class session to see live attendance" }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { class: "card-title-icon",
                            Icon::<LdTriangleAlert> { icon: LdTriangleAlert, width: 20, height: 20 }
                            "Low Attendance Alerts"
                        }
                        CardDescription { "Students requiring attention" }
                    }
                    CardContent {
                        div { class: "at-risk-list",
                            for student in teacher.at_risk.iter() {
                                AtRiskRow { key: "{student.id}", student: student.clone() }
                            }
                        }
                    }
                }
            }

            QuickActions { description: "Common teaching tasks",
                QuickAction {
                    icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 24, height: 24 } },
                    label: "Schedule Class",
                }
                QuickAction {
                    icon: rsx! { Icon::<LdFileText> { icon: LdFileText, width: 24, height: 24 } },
                    label: "Attendance Reports",
                }
                QuickAction {
                    icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 } },
                    label: "Student List",
                }
                QuickAction {
                    icon: rsx! { Icon::<LdBell> { icon: LdBell, width: 24, height: 24 } },
                    label: "Send Alerts",
                }
            }
        }
    }
}

/// One of today's classes. Only the active class carries the session toggle.
#[component]
fn ClassCard(
    slot: ClassSlot,
    session_active: bool,
    elapsed: String,
    on_toggle: EventHandler<()>,
) -> Element {
    let badge = match slot.status {
        ClassStatus::Completed => BadgeVariant::Secondary,
        ClassStatus::Active => BadgeVariant::Primary,
        ClassStatus::Upcoming => BadgeVariant::Outline,
    };
    let rate = slot.attendance_rate();

    rsx! {
        Card { class: "class-card", highlighted: slot.status == ClassStatus::Active,
            CardContent { class: "class-card-body",
                div { class: "class-card-info",
                    div { class: "class-card-title",
                        div {
                            h3 { "{slot.name}" }
                            p { class: "class-card-meta", "{slot.time} \u{2022} Room {slot.room}" }
                        }
                        Badge { variant: badge, {slot.status.label()} }
                    }
                    div { class: "class-card-stats",
                        span { class: "class-card-present",
                            Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 }
                            "{slot.present}/{slot.enrolled} Present"
                        }
                        if slot.status != ClassStatus::Upcoming {
                            div { class: "class-card-rate",
                                ProgressBar { class: "class-card-meter", value: f64::from(rate) }
                                span { {format_percent(f64::from(rate))} }
                            }
                        }
                        if slot.status == ClassStatus::Active && session_active {
                            span { class: "session-clock",
                                Icon::<LdClock> { icon: LdClock, width: 16, height: 16 }
                                "{elapsed}"
                            }
                        }
                    }
                }
                div { class: "class-card-actions",
                    match slot.status {
                        ClassStatus::Active => rsx! {
                            Button {
                                variant: if session_active { ButtonVariant::Destructive } else { ButtonVariant::Success },
                                onclick: move |_| on_toggle.call(()),
                                if session_active {
                                    Icon::<LdPause> { icon: LdPause, width: 16, height: 16 }
                                    "End Session"
                                } else {
                                    Icon::<LdPlay> { icon: LdPlay, width: 16, height: 16 }
                                    "Start Session"
                                }
                            }
                        },
                        ClassStatus::Upcoming => rsx! {
                            Button { variant: ButtonVariant::Outline,
                                Icon::<LdClock> { icon: LdClock, width: 16, height: 16 }
                                "Prepare Class"
                            }
                        },
                        ClassStatus::Completed => rsx! {
                            Button { variant: ButtonVariant::Outline,
                                Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                                "View Report"
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn CheckInRow(check_in: CheckIn) -> Element {
    rsx! {
        div { class: "feed-row",
            div { class: "feed-row-who",
                span { class: "feed-dot" }
                div {
                    p { class: "feed-name", "{check_in.student}" }
                    p { class: "feed-meta", "{check_in.id}" }
                }
            }
            div { class: "feed-row-when",
                p { class: "feed-status", "Present" }
                p { class: "feed-meta", "{check_in.time}" }
            }
        }
    }
}

#[component]
fn AtRiskRow(student: AtRiskStudent) -> Element {
    rsx! {
        div { class: "at-risk-row",
            div {
                p { class: "at-risk-name", "{student.name}" }
                p { class: "at-risk-meta", "{student.id}" }
                p { class: "at-risk-absences", "{student.absences} recent absences" }
            }
            div { class: "at-risk-side",
                p { class: "at-risk-value", {format_percent(student.attendance)} }
                Button { variant: ButtonVariant::Outline, size: ButtonSize::Sm, "Contact" }
            }
        }
    }
}
