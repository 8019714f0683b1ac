use crate::Role;

/// Username shown in the demo-credentials panel.
pub const DEMO_USERNAME: &str = "demo";

/// Password shown in the demo-credentials panel.
pub const DEMO_PASSWORD: &str = "password";

/// State behind the sign-in form.
///
/// Credentials are never checked against anything: a submit is accepted
/// whenever a role is selected and both fields are non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub role: Option<Role>,
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn select_role(&mut self, role: Role) {
        self.role = Some(role);
    }

    /// Whether the submit button is enabled. Mirrors the form's `disabled`
    /// attribute, which only depends on the role selection.
    pub fn can_submit(&self) -> bool {
        self.role.is_some()
    }

    /// The role to sign in as, or `None` if the submit should be ignored.
    pub fn submit(&self) -> Option<Role> {
        if self.username.is_empty() || self.password.is_empty() {
            return None;
        }
        self.role
    }

    /// Card description above the credential fields.
    pub fn heading(&self) -> String {
        match self.role {
            Some(role) => format!("Login as {}", role.title()),
            None => "Please select your role above".to_string(),
        }
    }

    pub fn submit_label(&self) -> String {
        let who = self.role.map(|r| r.title()).unwrap_or("User");
        format!("Sign In as {who}")
    }
}
