use std::sync::Arc;

use axum::http::StatusCode;
use chrono::Local;

use super::catalog::{self, Course};
use super::domain::{
    Application, ApplicationId, ApplicationStatus, NewApplication, DEFAULT_COURSE_TITLE,
    DEFAULT_STUDENT_NAME, INITIAL_PROGRESS,
};
use super::lifecycle::{self, InvalidTransition};
use super::stats::{self, AgentStats, DashboardStats, MonthlyTrendPoint, StatsConfig};
use super::store::{ApplicationStore, StoreError};
use super::submission::ApplicationDraft;

/// Facade composing the store, the lifecycle engine, and the aggregator.
///
/// The store handle is injected so callers share one collection explicitly
/// instead of reaching for ambient state, and so tests can swap in their own
/// store.
pub struct AdmissionsService<S> {
    store: Arc<S>,
    stats_config: StatsConfig,
}

impl<S> AdmissionsService<S>
where
    S: ApplicationStore + 'static,
{
    pub fn new(store: Arc<S>, stats_config: StatsConfig) -> Self {
        Self {
            store,
            stats_config,
        }
    }

    /// Create a new application with status Submitted and initial progress,
    /// inserted at the front of the collection. Missing fields are defaulted,
    /// never rejected.
    pub fn create_application(
        &self,
        request: NewApplication,
    ) -> Result<Application, AdmissionsError> {
        let record = Application {
            id: self.store.next_id()?,
            student_name: request
                .student_name
                .unwrap_or_else(|| DEFAULT_STUDENT_NAME.to_string()),
            course_title: request
                .course_title
                .unwrap_or_else(|| DEFAULT_COURSE_TITLE.to_string()),
            applied_date: request
                .applied_date
                .unwrap_or_else(|| Local::now().date_naive()),
            status: ApplicationStatus::Submitted,
            progress: INITIAL_PROGRESS,
        };

        self.store.insert_front(record.clone())?;
        tracing::info!(id = %record.id, "application created");
        Ok(record)
    }

    /// Commit a submission-workflow draft as a new application.
    pub fn submit_draft(&self, draft: ApplicationDraft) -> Result<Application, AdmissionsError> {
        self.create_application(draft.assemble())
    }

    /// Run the lifecycle engine against a stored application and persist the
    /// result. The store is left untouched when the transition is rejected.
    pub fn transition_status(
        &self,
        id: &ApplicationId,
        target: ApplicationStatus,
    ) -> Result<Application, AdmissionsError> {
        let current = self.store.get(id)?;
        let updated = lifecycle::apply_transition(current, target)?;
        self.store.put(updated.clone())?;
        tracing::info!(id = %updated.id, status = updated.status.label(), "application status updated");
        Ok(updated)
    }

    pub fn get_application(&self, id: &ApplicationId) -> Result<Application, AdmissionsError> {
        Ok(self.store.get(id)?)
    }

    /// Full collection, newest first.
    pub fn list_applications(&self) -> Result<Vec<Application>, AdmissionsError> {
        Ok(self.store.list()?)
    }

    pub fn dashboard_stats(&self) -> Result<DashboardStats, AdmissionsError> {
        let applications = self.store.list()?;
        Ok(stats::dashboard_stats(&applications, &self.stats_config))
    }

    pub fn agent_stats(&self) -> Result<AgentStats, AdmissionsError> {
        let applications = self.store.list()?;
        Ok(stats::agent_stats(&applications, &self.stats_config))
    }

    pub fn monthly_trend(&self) -> Vec<MonthlyTrendPoint> {
        stats::monthly_trend()
    }

    pub fn courses(&self) -> Vec<Course> {
        catalog::courses()
    }
}

/// Error raised by the admissions service.
#[derive(Debug, thiserror::Error)]
pub enum AdmissionsError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Lifecycle(#[from] InvalidTransition),
}

impl AdmissionsError {
    /// HTTP status the router and the binary error type map this error to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdmissionsError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            AdmissionsError::Store(StoreError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AdmissionsError::Lifecycle(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}
