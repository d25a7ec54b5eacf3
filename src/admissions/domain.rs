use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle states an admission application can occupy once it exists in the
/// store. A draft being assembled by the submission workflow is not an
/// application yet and is modeled separately (`submission::ApplicationDraft`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Submitted,
    UnderReview,
    Approved,
    Rejected,
    FeePending,
    Enrolled,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::UnderReview => "Under Review",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::FeePending => "Fee Pending",
            Self::Enrolled => "Enrolled",
        }
    }

    /// Terminal states admit no further transitions.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::Enrolled)
    }

    /// States that still await an admissions decision.
    pub const fn is_pending_review(self) -> bool {
        matches!(self, Self::Submitted | Self::UnderReview)
    }
}

/// One student's admission request, tracked through the lifecycle engine.
///
/// `progress` is derived from status transitions and must never be written by
/// callers directly; the store persists whatever the lifecycle engine hands
/// back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub student_name: String,
    pub course_title: String,
    pub applied_date: NaiveDate,
    pub status: ApplicationStatus,
    pub progress: u8,
}

/// Progress assigned to a freshly created application.
pub const INITIAL_PROGRESS: u8 = 20;

/// Caller-provided fields for creating an application. Everything is optional;
/// the service fills fixed defaults rather than rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewApplication {
    pub student_name: Option<String>,
    pub course_title: Option<String>,
    pub applied_date: Option<NaiveDate>,
}

pub const DEFAULT_STUDENT_NAME: &str = "John Doe";
pub const DEFAULT_COURSE_TITLE: &str = "General Course";
