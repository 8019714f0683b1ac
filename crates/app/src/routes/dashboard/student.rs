use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdCalendar, LdCircleCheck, LdClock, LdFingerprint, LdTrendingUp,
    LdTriangleAlert, LdUser,
};
use dioxus_free_icons::Icon;
use shared_types::{
    AttendanceBand, AttendanceMark, CurrentClass, RecentClass, Reminder, ReminderKind,
    StudentProfile, SubjectAttendance,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, PageHeader, PageSubtitle, PageTitle, ProgressBar,
    ProgressTone, ToastOptions,
};

use super::{HeaderButton, LogoutButton};
use crate::components::verification::BiometricVerification;
use crate::config::config;
use crate::format_helpers::format_percent;

#[component]
pub fn StudentDashboard() -> Element {
    let student = &config().fixtures.student;
    let profile = &student.profile;
    let mut show_verification = use_signal(|| false);
    let mut has_marked = use_signal(|| student.current_class.has_marked);
    let toast = use_toast();

    let overall_band = AttendanceBand::from_percentage(profile.overall_attendance).as_str();

    rsx! {
        PageHeader {
            icon: rsx! { Icon::<LdUser> { icon: LdUser, width: 24, height: 24 } },
            actions: rsx! {
                Badge { class: "attendance-badge band-{overall_band}", variant: BadgeVariant::Secondary,
                    {format_percent(profile.overall_attendance)}
                    " Attendance"
                }
                HeaderButton {
                    icon: rsx! { Icon::<LdBell> { icon: LdBell, width: 16, height: 16 } },
                    label: "Notifications",
                }
                LogoutButton {}
            },
            PageTitle { "Student Dashboard" }
            PageSubtitle { "{profile.name} - {profile.id}" }
        }

        main { class: "dashboard-body",
            ProfileSummary { profile: profile.clone() }

            if student.current_class.is_active {
                CurrentClassCard {
                    class_info: student.current_class.clone(),
                    has_marked: has_marked(),
                    on_mark: move |_| show_verification.set(true),
                }
            }

            div { class: "dashboard-columns",
                Card {
                    CardHeader {
                        CardTitle { "Subject-wise Attendance" }
                        CardDescription { "Your attendance for each subject" }
                    }
                    CardContent {
                        div { class: "meter-list",
                            for subject in student.subjects.iter() {
                                SubjectRow { key: "{subject.subject}", subject: subject.clone() }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Recent Classes" }
                        CardDescription { "Your attendance history" }
                    }
                    CardContent {
                        div { class: "recent-list",
                            for (i, entry) in student.recent_classes.iter().enumerate() {
                                RecentClassRow { key: "{i}", entry: entry.clone() }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { class: "card-title-icon",
                        Icon::<LdBell> { icon: LdBell, width: 20, height: 20 }
                        "Alerts & Reminders"
                    }
                }
                CardContent {
                    div { class: "reminder-list",
                        for (i, reminder) in student.reminders.iter().enumerate() {
                            ReminderRow { key: "{i}", reminder: reminder.clone() }
                        }
                    }
                }
            }
        }

        if show_verification() {
            BiometricVerification {
                on_success: move |_| {
                    show_verification.set(false);
                    has_marked.set(true);
                    toast.success("Attendance marked".to_string(), ToastOptions::new());
                },
                on_cancel: move |_| show_verification.set(false),
            }
        }
    }
}

#[component]
fn ProfileSummary(profile: StudentProfile) -> Element {
    let on_track = profile.is_on_track();

    rsx! {
        Card {
            CardContent { class: "profile-grid",
                div { class: "profile-cell",
                    div { class: "profile-avatar",
                        Icon::<LdUser> { icon: LdUser, width: 40, height: 40 }
                    }
                    h3 { "{profile.name}" }
                    p { class: "profile-meta", "{profile.id}" }
                }
                div { class: "profile-cell",
                    span { class: "profile-icon", "data-tone": "primary",
                        Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 32, height: 32 }
                    }
                    p { class: "profile-figure", {format_percent(profile.overall_attendance)} }
                    p { class: "profile-meta", "Overall Attendance" }
                }
                div { class: "profile-cell",
                    span { class: "profile-icon", "data-tone": "success",
                        Icon::<LdBookOpen> { icon: LdBookOpen, width: 32, height: 32 }
                    }
                    p { class: "profile-value", "{profile.department}" }
                    p { class: "profile-meta", "{profile.semester}" }
                }
                div { class: "profile-cell",
                    if on_track {
                        span { class: "profile-icon", "data-tone": "success",
                            Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 32, height: 32 }
                        }
                        p { class: "profile-value", "On Track" }
                    } else {
                        span { class: "profile-icon", "data-tone": "destructive",
                            Icon::<LdTriangleAlert> { icon: LdTriangleAlert, width: 32, height: 32 }
                        }
                        p { class: "profile-value", "At Risk" }
                    }
                    p { class: "profile-meta",
                        "Required: "
                        {format_percent(profile.required_attendance)}
                    }
                }
            }
        }
    }
}

/// The class in progress, with the entry point to biometric check-in.
#[component]
fn CurrentClassCard(class_info: CurrentClass, has_marked: bool, on_mark: EventHandler<()>) -> Element {
    rsx! {
        Card { class: "current-class", highlighted: true,
            CardHeader {
                CardTitle { class: "card-title-icon",
                    Icon::<LdClock> { icon: LdClock, width: 20, height: 20 }
                    "Current Class Session"
                }
            }
            CardContent { class: "current-class-body",
                div {
                    h3 { class: "current-class-name", "{class_info.name}" }
                    div { class: "current-class-meta",
                        p { "Teacher: {class_info.teacher}" }
                        p { "Room: {class_info.room}" }
                        p { "Time: {class_info.time}" }
                    }
                }
                if has_marked {
                    div { class: "current-class-marked",
                        Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 48, height: 48 }
                        p { "Attendance Marked" }
                    }
                } else {
                    Button {
                        variant: ButtonVariant::Success,
                        size: ButtonSize::Lg,
                        onclick: move |_| on_mark.call(()),
                        Icon::<LdFingerprint> { icon: LdFingerprint, width: 20, height: 20 }
                        "Mark Attendance"
                    }
                }
            }
        }
    }
}

#[component]
fn SubjectRow(subject: SubjectAttendance) -> Element {
    let pct = subject.percentage();
    let (tone, badge) = band_style(subject.band());

    rsx! {
        div { class: "meter-row",
            div { class: "meter-row-head",
                span { class: "meter-row-name", "{subject.subject}" }
                span { class: "meter-row-meta", "{subject.present}/{subject.total} classes" }
            }
            div { class: "meter-row-bar",
                ProgressBar { value: pct, tone }
                Badge { class: "meter-row-badge", variant: badge, {format_percent(pct)} }
            }
        }
    }
}

/// Bar tone and badge variant for an attendance band.
fn band_style(band: AttendanceBand) -> (ProgressTone, BadgeVariant) {
    match band {
        AttendanceBand::Good => (ProgressTone::Success, BadgeVariant::Success),
        AttendanceBand::Warning => (ProgressTone::Warning, BadgeVariant::Warning),
        AttendanceBand::Critical => (ProgressTone::Destructive, BadgeVariant::Destructive),
    }
}

#[component]
fn RecentClassRow(entry: RecentClass) -> Element {
    let label = entry.attendance.label();

    rsx! {
        div { class: "recent-row",
            div {
                p { class: "recent-subject", "{entry.subject}" }
                p { class: "recent-date", "{entry.date}" }
            }
            match entry.attendance {
                AttendanceMark::Present => rsx! {
                    Badge { variant: BadgeVariant::Primary,
                        Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 12, height: 12 }
                        "{label}"
                    }
                },
                AttendanceMark::Absent => rsx! {
                    Badge { variant: BadgeVariant::Destructive,
                        Icon::<LdTriangleAlert> { icon: LdTriangleAlert, width: 12, height: 12 }
                        "{label}"
                    }
                },
            }
        }
    }
}

#[component]
fn ReminderRow(reminder: Reminder) -> Element {
    let kind = match reminder.kind {
        ReminderKind::Warning => "warning",
        ReminderKind::Info => "info",
    };

    rsx! {
        div { class: "reminder-row", "data-kind": kind,
            match reminder.kind {
                ReminderKind::Warning => rsx! {
                    Icon::<LdTriangleAlert> { icon: LdTriangleAlert, width: 20, height: 20 }
                },
                ReminderKind::Info => rsx! {
                    Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 }
                },
            }
            div {
                p { class: "reminder-title", "{reminder.title}" }
                p { class: "reminder-detail", "{reminder.detail}" }
            }
        }
    }
}
