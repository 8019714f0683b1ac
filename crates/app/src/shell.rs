use dioxus::prelude::*;
use shared_types::{Role, Shell};

/// Global shell state: which role, if any, is signed in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShellState {
    pub shell: Signal<Shell>,
}

impl ShellState {
    pub fn new() -> Self {
        Self {
            shell: Signal::new(Shell::new()),
        }
    }

    pub fn login(&mut self, role: Role) {
        tracing::info!(role = role.as_str(), "signed in");
        self.shell.write().login(role);
    }

    pub fn logout(&mut self) {
        if let Some(role) = self.shell.read().role() {
            tracing::info!(role = role.as_str(), "signed out");
        }
        self.shell.write().logout();
    }
}

/// Hook to access the shell state.
pub fn use_shell() -> ShellState {
    use_context::<ShellState>()
}
