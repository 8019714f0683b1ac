use serde::{Deserialize, Serialize};

/// Role chosen on the login screen. Selects which dashboard is shown and
/// carries no authorization semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

/// All roles in the order the login screen presents them.
pub const ALL_ROLES: &[Role] = &[Role::Admin, Role::Teacher, Role::Student];

impl Role {
    /// Lowercase key used in config files and element ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
        }
    }

    /// Parse a role key. Unknown keys yield `None` rather than a default role.
    pub fn from_key(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "teacher" => Some(Role::Teacher),
            "student" => Some(Role::Student),
            _ => None,
        }
    }

    /// Card title on the login screen.
    pub fn title(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Teacher => "Teacher",
            Role::Student => "Student",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Admin => "Manage colleges, classes, students, and teachers",
            Role::Teacher => "Conduct classes and monitor attendance",
            Role::Student => "Mark attendance with biometric verification",
        }
    }

    /// Feature bullets listed under the role card.
    pub fn features(&self) -> &'static [&'static str] {
        match self {
            Role::Admin => &[
                "User Management",
                "System Analytics",
                "Report Generation",
                "Security Settings",
            ],
            Role::Teacher => &[
                "Start Class Sessions",
                "Live Attendance",
                "Student Reports",
                "Absence Alerts",
            ],
            Role::Student => &[
                "Biometric Check-in",
                "Attendance History",
                "Performance Tracking",
                "Alerts & Reminders",
            ],
        }
    }
}
