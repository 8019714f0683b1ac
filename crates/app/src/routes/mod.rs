pub mod dashboard;
pub mod login;

use dioxus::prelude::*;
use shared_types::ShellView;

use crate::shell::use_shell;

/// Switches between the login screen and the signed-in role's dashboard.
#[component]
pub fn Root() -> Element {
    let shell = use_shell();
    let view = shell.shell.read().view();

    match view {
        ShellView::Login => rsx! { login::Login {} },
        ShellView::Dashboard(role) => rsx! { dashboard::Dashboard { role } },
    }
}
