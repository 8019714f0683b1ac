use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBuilding, LdClock, LdFileText, LdGraduationCap, LdSettings, LdTrendingUp, LdTriangleAlert,
    LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{Activity, ActivityKind, DepartmentStat};
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader, PageSubtitle,
    PageTitle, ProgressBar, StatTile, StatTone,
};

use super::{HeaderButton, LogoutButton, QuickAction, QuickActions};
use crate::config::config;
use crate::format_helpers::{format_percent, format_thousands};

#[component]
pub fn AdminDashboard() -> Element {
    let admin = &config().fixtures.admin;
    let stats = &admin.stats;

    rsx! {
        PageHeader {
            icon: rsx! { Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 24, height: 24 } },
            actions: rsx! {
                HeaderButton {
                    icon: rsx! { Icon::<LdSettings> { icon: LdSettings, width: 16, height: 16 } },
                    label: "Settings",
                }
                LogoutButton {}
            },
            PageTitle { "Admin Dashboard" }
            PageSubtitle { "College Attendance Management" }
        }

        main { class: "dashboard-body",
            div { class: "admin-stats-grid",
                StatTile {
                    icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 32, height: 32 } },
                    label: "Total Students",
                    value: format_thousands(stats.total_students),
                }
                StatTile {
                    icon: rsx! { Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 32, height: 32 } },
                    label: "Total Teachers",
                    value: stats.total_teachers.to_string(),
                    tone: StatTone::Success,
                }
                StatTile {
                    icon: rsx! { Icon::<LdBuilding> { icon: LdBuilding, width: 32, height: 32 } },
                    label: "Total Classes",
                    value: stats.total_classes.to_string(),
                    tone: StatTone::Warning,
                }
                StatTile {
                    icon: rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 32, height: 32 } },
                    label: "Today's Attendance",
                    value: format_percent(stats.today_attendance),
                }
                StatTile {
                    icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 32, height: 32 } },
                    label: "Active Classes",
                    value: stats.active_classes.to_string(),
                    tone: StatTone::Success,
                }
                StatTile {
                    icon: rsx! { Icon::<LdTriangleAlert> { icon: LdTriangleAlert, width: 32, height: 32 } },
                    label: "Low Attendance",
                    value: stats.low_attendance_alerts.to_string(),
                    tone: StatTone::Destructive,
                }
            }

            div { class: "dashboard-columns",
                Card {
                    CardHeader {
                        CardTitle { class: "card-title-icon",
                            Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 20, height: 20 }
                            "Department Attendance Overview"
                        }
                        CardDescription { "Attendance rates by department" }
                    }
                    CardContent {
                        div { class: "meter-list",
                            for dept in admin.departments.iter() {
                                DepartmentRow { key: "{dept.name}", dept: dept.clone() }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Recent Activities" }
                        CardDescription { "Latest system activities and alerts" }
                    }
                    CardContent {
                        div { class: "activity-list",
                            for (i, activity) in admin.activities.iter().enumerate() {
                                ActivityRow { key: "{i}", activity: activity.clone() }
                            }
                        }
                    }
                }
            }

            QuickActions { description: "Common administrative tasks",
                QuickAction {
                    icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 } },
                    label: "Manage Students",
                }
                QuickAction {
                    icon: rsx! { Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 24, height: 24 } },
                    label: "Manage Teachers",
                }
                QuickAction {
                    icon: rsx! { Icon::<LdBuilding> { icon: LdBuilding, width: 24, height: 24 } },
                    label: "Manage Classes",
                }
                QuickAction {
                    icon: rsx! { Icon::<LdFileText> { icon: LdFileText, width: 24, height: 24 } },
                    label: "Generate Reports",
                }
            }
        }
    }
}

#[component]
fn DepartmentRow(dept: DepartmentStat) -> Element {
    rsx! {
        div { class: "meter-row",
            div { class: "meter-row-head",
                span { class: "meter-row-name", "{dept.name}" }
                span { class: "meter-row-meta", "{dept.students} students" }
            }
            div { class: "meter-row-bar",
                ProgressBar { value: dept.attendance }
                span { class: "meter-row-value", {format_percent(dept.attendance)} }
            }
        }
    }
}

#[component]
fn ActivityRow(activity: Activity) -> Element {
    let icon = match activity.kind {
        ActivityKind::Class => rsx! {
            Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 16, height: 16 }
        },
        ActivityKind::Alert => rsx! {
            Icon::<LdTriangleAlert> { icon: LdTriangleAlert, width: 16, height: 16 }
        },
        ActivityKind::Enrollment => rsx! {
            Icon::<LdUserCheck> { icon: LdUserCheck, width: 16, height: 16 }
        },
    };

    rsx! {
        div { class: "activity-row",
            div { class: "activity-icon", "data-kind": activity_kind_key(activity.kind), {icon} }
            div {
                p { class: "activity-message", "{activity.message}" }
                p { class: "activity-time", "{activity.time}" }
            }
        }
    }
}

fn activity_kind_key(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Class => "class",
        ActivityKind::Alert => "alert",
        ActivityKind::Enrollment => "enrollment",
    }
}
