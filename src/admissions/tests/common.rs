use std::sync::Arc;

use chrono::NaiveDate;

use crate::admissions::domain::{Application, ApplicationId, ApplicationStatus};
use crate::admissions::service::AdmissionsService;
use crate::admissions::stats::StatsConfig;
use crate::admissions::store::InMemoryApplicationStore;

pub(super) fn application(
    id: &str,
    status: ApplicationStatus,
    progress: u8,
) -> Application {
    Application {
        id: ApplicationId(id.to_string()),
        student_name: "Test Student".to_string(),
        course_title: "Test Course".to_string(),
        applied_date: NaiveDate::from_ymd_opt(2023, 10, 1).expect("valid date"),
        status,
        progress,
    }
}

/// Five applications with two approved and one under review, matching the
/// dashboard aggregation scenario.
pub(super) fn mixed_applications() -> Vec<Application> {
    vec![
        application("app-101", ApplicationStatus::Approved, 80),
        application("app-102", ApplicationStatus::Approved, 80),
        application("app-103", ApplicationStatus::UnderReview, 50),
        application("app-104", ApplicationStatus::Rejected, 100),
        application("app-105", ApplicationStatus::FeePending, 90),
    ]
}

pub(super) fn stats_config() -> StatsConfig {
    StatsConfig {
        revenue_baseline: 4_500_000,
        revenue_per_admission: 150_000,
        active_agents: 12,
        leads_floor: 45,
        conversions_floor: 12,
        pending_commissions: 125_000,
        total_earnings: 480_000,
    }
}

pub(super) fn seeded_service() -> (
    AdmissionsService<InMemoryApplicationStore>,
    Arc<InMemoryApplicationStore>,
) {
    let store = Arc::new(InMemoryApplicationStore::seeded());
    let service = AdmissionsService::new(store.clone(), stats_config());
    (service, store)
}

pub(super) fn empty_service() -> (
    AdmissionsService<InMemoryApplicationStore>,
    Arc<InMemoryApplicationStore>,
) {
    let store = Arc::new(InMemoryApplicationStore::empty());
    let service = AdmissionsService::new(store.clone(), stats_config());
    (service, store)
}
