use crate::Role;

/// Which top-level view the root shell renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellView {
    Login,
    Dashboard(Role),
}

/// The root shell's only piece of state: the current role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shell {
    role: Option<Role>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, role: Role) {
        self.role = Some(role);
    }

    pub fn logout(&mut self) {
        self.role = None;
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn view(&self) -> ShellView {
        match self.role {
            Some(role) => ShellView::Dashboard(role),
            None => ShellView::Login,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_login() {
        assert_eq!(Shell::new().view(), ShellView::Login);
    }

    #[test]
    fn login_switches_dashboard() {
        let mut shell = Shell::new();
        shell.login(Role::Admin);
        assert_eq!(shell.view(), ShellView::Dashboard(Role::Admin));
        shell.login(Role::Student);
        assert_eq!(shell.view(), ShellView::Dashboard(Role::Student));
    }

    #[test]
    fn logout_clears_role() {
        let mut shell = Shell::new();
        shell.login(Role::Teacher);
        shell.logout();
        assert_eq!(shell.role(), None);
        assert_eq!(shell, Shell::new());
    }
}
