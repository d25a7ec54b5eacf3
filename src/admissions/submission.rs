use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{NewApplication, DEFAULT_STUDENT_NAME};

/// Fallback course title recorded when a draft reaches review without a
/// course selection.
pub const PENDING_SELECTION: &str = "Pending Selection";

/// Stages of the submission workflow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftStage {
    PersonalDetails,
    CourseSelection,
    Documents,
    Review,
}

impl DraftStage {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::PersonalDetails,
            Self::CourseSelection,
            Self::Documents,
            Self::Review,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PersonalDetails => "Personal Details",
            Self::CourseSelection => "Course Selection",
            Self::Documents => "Documents",
            Self::Review => "Review",
        }
    }

    const fn next(self) -> Self {
        match self {
            Self::PersonalDetails => Self::CourseSelection,
            Self::CourseSelection => Self::Documents,
            Self::Documents | Self::Review => Self::Review,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::PersonalDetails | Self::CourseSelection => Self::PersonalDetails,
            Self::Documents => Self::CourseSelection,
            Self::Review => Self::Documents,
        }
    }
}

/// Mutable draft accumulating field values across the four workflow stages.
///
/// The draft is its own entity with its own lifecycle: created when the
/// workflow starts, consumed by [`ApplicationDraft::assemble`] on final
/// confirmation, and simply dropped on abandon. It never reaches the
/// application store. Stage navigation is unconditional in both directions;
/// every field stays optional until the final commit, where fixed defaults
/// fill the gaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub college: Option<String>,
    pub course_title: Option<String>,
    pub intake_session: Option<String>,
    pub documents: Vec<String>,
    #[serde(default)]
    stage: DraftStage,
}

impl Default for DraftStage {
    fn default() -> Self {
        Self::PersonalDetails
    }
}

impl ApplicationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> DraftStage {
        self.stage
    }

    pub fn advance(&mut self) {
        self.stage = self.stage.next();
    }

    pub fn back(&mut self) {
        self.stage = self.stage.previous();
    }

    pub fn attach_document(&mut self, name: impl Into<String>) {
        self.documents.push(name.into());
    }

    fn student_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (None, None) => DEFAULT_STUDENT_NAME.to_string(),
            (first, last) => {
                let mut name = String::new();
                if let Some(first) = first {
                    name.push_str(first);
                }
                if let Some(last) = last {
                    if !name.is_empty() {
                        name.push(' ');
                    }
                    name.push_str(last);
                }
                name
            }
        }
    }

    /// Final confirmation at the review stage: fold the accumulated fields
    /// into a creation request for the service.
    pub fn assemble(self) -> NewApplication {
        let course_title = self
            .course_title
            .clone()
            .unwrap_or_else(|| PENDING_SELECTION.to_string());

        NewApplication {
            student_name: Some(self.student_name()),
            course_title: Some(course_title),
            applied_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_advance_in_order_and_saturate_at_review() {
        let mut draft = ApplicationDraft::new();
        assert_eq!(draft.stage(), DraftStage::PersonalDetails);
        draft.advance();
        assert_eq!(draft.stage(), DraftStage::CourseSelection);
        draft.advance();
        assert_eq!(draft.stage(), DraftStage::Documents);
        draft.advance();
        assert_eq!(draft.stage(), DraftStage::Review);
        draft.advance();
        assert_eq!(draft.stage(), DraftStage::Review);
    }

    #[test]
    fn back_navigation_is_unconditional_and_saturates_at_start() {
        let mut draft = ApplicationDraft::new();
        draft.advance();
        draft.advance();
        draft.back();
        assert_eq!(draft.stage(), DraftStage::CourseSelection);
        draft.back();
        draft.back();
        assert_eq!(draft.stage(), DraftStage::PersonalDetails);
    }

    #[test]
    fn assemble_concatenates_first_and_last_name() {
        let draft = ApplicationDraft {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            course_title: Some("Computer Science Engineering".to_string()),
            ..ApplicationDraft::new()
        };

        let request = draft.assemble();
        assert_eq!(request.student_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(
            request.course_title.as_deref(),
            Some("Computer Science Engineering")
        );
    }

    #[test]
    fn assemble_defaults_name_and_flags_pending_course() {
        let request = ApplicationDraft::new().assemble();
        assert_eq!(request.student_name.as_deref(), Some(DEFAULT_STUDENT_NAME));
        assert_eq!(request.course_title.as_deref(), Some(PENDING_SELECTION));
    }

    #[test]
    fn partial_name_is_used_as_is() {
        let draft = ApplicationDraft {
            first_name: Some("Priya".to_string()),
            ..ApplicationDraft::new()
        };
        assert_eq!(draft.assemble().student_name.as_deref(), Some("Priya"));
    }
}
