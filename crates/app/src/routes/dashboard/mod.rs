pub mod admin;
pub mod student;
pub mod teacher;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLogOut;
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
};

use crate::shell::use_shell;

/// Role-adaptive dashboard: renders the dashboard for the signed-in role.
#[component]
pub fn Dashboard(role: Role) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "dashboard", "data-role": role.as_str(),
            match role {
                Role::Admin => rsx! { admin::AdminDashboard {} },
                Role::Teacher => rsx! { teacher::TeacherDashboard {} },
                Role::Student => rsx! { student::StudentDashboard {} },
            }
        }
    }
}

/// Header button that returns to the login screen.
#[component]
pub fn LogoutButton() -> Element {
    let mut shell = use_shell();

    rsx! {
        Button {
            variant: ButtonVariant::Outline,
            size: ButtonSize::Sm,
            onclick: move |_| shell.logout(),
            Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
            "Logout"
        }
    }
}

/// Outline header button with a leading icon and no action wired up.
#[component]
pub fn HeaderButton(icon: Element, label: String) -> Element {
    rsx! {
        Button { variant: ButtonVariant::Outline, size: ButtonSize::Sm,
            {icon}
            "{label}"
        }
    }
}

/// "Quick Actions" card holding a grid of [`QuickAction`] tiles.
#[component]
pub fn QuickActions(description: String, children: Element) -> Element {
    rsx! {
        Card { class: "quick-actions",
            CardHeader {
                CardTitle { "Quick Actions" }
                CardDescription { "{description}" }
            }
            CardContent {
                div { class: "quick-action-grid", {children} }
            }
        }
    }
}

#[component]
pub fn QuickAction(icon: Element, label: String) -> Element {
    rsx! {
        Button { variant: ButtonVariant::Outline, size: ButtonSize::Tile,
            {icon}
            span { "{label}" }
        }
    }
}
