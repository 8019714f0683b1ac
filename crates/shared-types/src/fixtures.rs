use serde::{Deserialize, Serialize};

use crate::ConfigError;

// ---------------------------------------------------------------------------
// Attendance bands
// ---------------------------------------------------------------------------

/// Threshold at or above which attendance is considered good.
pub const GOOD_ATTENDANCE: f64 = 85.0;

/// Threshold at or above which attendance is acceptable.
pub const MIN_ATTENDANCE: f64 = 75.0;

/// Colour band for an attendance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceBand {
    Good,
    Warning,
    Critical,
}

impl AttendanceBand {
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= GOOD_ATTENDANCE {
            AttendanceBand::Good
        } else if pct >= MIN_ATTENDANCE {
            AttendanceBand::Warning
        } else {
            AttendanceBand::Critical
        }
    }

    /// CSS modifier used by the dashboards.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceBand::Good => "good",
            AttendanceBand::Warning => "warning",
            AttendanceBand::Critical => "critical",
        }
    }
}

/// `part / whole` as a percentage rounded to one decimal place.
pub fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let pct = f64::from(part) / f64::from(whole) * 100.0;
    (pct * 10.0).round() / 10.0
}

fn check_percentage(what: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid_fixture(format!(
            "{what}: {value} is not a percentage"
        )))
    }
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstitutionStats {
    pub total_students: u32,
    pub total_teachers: u32,
    pub total_classes: u32,
    pub today_attendance: f64,
    pub active_classes: u32,
    pub low_attendance_alerts: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Class,
    Alert,
    Enrollment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub message: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentStat {
    pub name: String,
    pub students: u32,
    pub attendance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminFixtures {
    #[serde(default)]
    pub stats: InstitutionStats,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub departments: Vec<DepartmentStat>,
}

impl AdminFixtures {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_percentage("admin.stats.today_attendance", self.stats.today_attendance)?;
        for dept in &self.departments {
            check_percentage(&format!("department {}", dept.name), dept.attendance)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Teacher
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassStatus {
    Completed,
    Active,
    Upcoming,
}

impl ClassStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ClassStatus::Completed => "Completed",
            ClassStatus::Active => "Active",
            ClassStatus::Upcoming => "Upcoming",
        }
    }
}

/// One of the teacher's classes today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSlot {
    pub id: u32,
    pub name: String,
    pub time: String,
    pub room: String,
    pub enrolled: u32,
    pub present: u32,
    pub status: ClassStatus,
}

impl ClassSlot {
    /// Present share of enrolled students as a whole percentage.
    pub fn attendance_rate(&self) -> u32 {
        if self.enrolled == 0 {
            return 0;
        }
        (f64::from(self.present) / f64::from(self.enrolled) * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckIn {
    pub student: String,
    pub id: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtRiskStudent {
    pub name: String,
    pub id: String,
    pub attendance: f64,
    pub absences: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeacherFixtures {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub classes: Vec<ClassSlot>,
    #[serde(default)]
    pub check_ins: Vec<CheckIn>,
    #[serde(default)]
    pub at_risk: Vec<AtRiskStudent>,
}

impl TeacherFixtures {
    /// The class currently in progress, if any.
    pub fn active_class(&self) -> Option<&ClassSlot> {
        self.classes
            .iter()
            .find(|c| c.status == ClassStatus::Active)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for class in &self.classes {
            if class.present > class.enrolled {
                return Err(ConfigError::invalid_fixture(format!(
                    "class {}: {} present exceeds {} enrolled",
                    class.name, class.present, class.enrolled
                )));
            }
        }
        for student in &self.at_risk {
            check_percentage(&format!("student {}", student.id), student.attendance)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Student
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    pub id: String,
    pub department: String,
    pub semester: String,
    pub overall_attendance: f64,
    pub required_attendance: f64,
}

impl StudentProfile {
    pub fn is_on_track(&self) -> bool {
        self.overall_attendance >= self.required_attendance
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentClass {
    pub name: String,
    pub teacher: String,
    pub room: String,
    pub time: String,
    pub is_active: bool,
    pub has_marked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceMark {
    Present,
    Absent,
}

impl AttendanceMark {
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceMark::Present => "Present",
            AttendanceMark::Absent => "Absent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentClass {
    pub subject: String,
    pub date: String,
    pub attendance: AttendanceMark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectAttendance {
    pub subject: String,
    pub present: u32,
    pub total: u32,
}

impl SubjectAttendance {
    pub fn percentage(&self) -> f64 {
        percentage(self.present, self.total)
    }

    pub fn band(&self) -> AttendanceBand {
        AttendanceBand::from_percentage(self.percentage())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub kind: ReminderKind,
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentFixtures {
    #[serde(default)]
    pub profile: StudentProfile,
    #[serde(default)]
    pub current_class: CurrentClass,
    #[serde(default)]
    pub recent_classes: Vec<RecentClass>,
    #[serde(default)]
    pub subjects: Vec<SubjectAttendance>,
    #[serde(default)]
    pub reminders: Vec<Reminder>,
}

impl StudentFixtures {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_percentage("student.profile.overall_attendance", self.profile.overall_attendance)?;
        check_percentage("student.profile.required_attendance", self.profile.required_attendance)?;
        for subject in &self.subjects {
            if subject.present > subject.total {
                return Err(ConfigError::invalid_fixture(format!(
                    "subject {}: {} present exceeds {} total",
                    subject.subject, subject.present, subject.total
                )));
            }
        }
        Ok(())
    }
}

/// Every dataset the dashboards render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub admin: AdminFixtures,
    #[serde(default)]
    pub teacher: TeacherFixtures,
    #[serde(default)]
    pub student: StudentFixtures,
}

impl Fixtures {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.admin.validate()?;
        self.teacher.validate()?;
        self.student.validate()
    }
}
