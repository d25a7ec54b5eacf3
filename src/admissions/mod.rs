//! Application lifecycle, storage, and derived-statistics engine for the
//! admissions portal.
//!
//! UI collaborators create applications through the submission workflow,
//! request status transitions through the lifecycle engine, and render
//! dashboards from the aggregator. All three sit atop the application store,
//! which is the sole owner of the persisted collection.

pub mod catalog;
pub mod domain;
pub mod lifecycle;
pub mod router;
pub mod service;
pub mod stats;
pub mod store;
pub mod submission;

#[cfg(test)]
mod tests;

pub use catalog::Course;
pub use domain::{
    Application, ApplicationId, ApplicationStatus, NewApplication, DEFAULT_COURSE_TITLE,
    DEFAULT_STUDENT_NAME, INITIAL_PROGRESS,
};
pub use lifecycle::InvalidTransition;
pub use router::admissions_router;
pub use service::{AdmissionsError, AdmissionsService};
pub use stats::{AgentStats, DashboardStats, MonthlyTrendPoint, StatsConfig};
pub use store::{
    seed_applications, ApplicationStore, InMemoryApplicationStore, JsonFileStore, StoreError,
};
pub use submission::{ApplicationDraft, DraftStage, PENDING_SELECTION};
