use serde::Serialize;

use super::domain::{Application, ApplicationStatus};

/// Constants feeding the aggregator.
///
/// Revenue and agent-ledger figures are configuration rather than derived
/// data in this scope; isolating them here lets a real accounting backend
/// replace them without touching the aggregation logic. The floors keep demo
/// dashboards from regressing below their launch baseline when the working
/// dataset is small.
#[derive(Debug, Clone)]
pub struct StatsConfig {
    pub revenue_baseline: u64,
    pub revenue_per_admission: u64,
    pub active_agents: u32,
    pub leads_floor: u64,
    pub conversions_floor: u64,
    pub pending_commissions: u64,
    pub total_earnings: u64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            revenue_baseline: 4_500_000,
            revenue_per_admission: 150_000,
            active_agents: 12,
            leads_floor: 45,
            conversions_floor: 12,
            pending_commissions: 125_000,
            total_earnings: 480_000,
        }
    }
}

/// Admin dashboard headline numbers, recomputed on demand from the current
/// collection. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_applications: u64,
    pub pending_review: u64,
    pub total_revenue: u64,
    pub active_agents: u32,
}

/// Agent portal summary, recomputed on demand. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentStats {
    pub total_leads: u64,
    pub conversions: u64,
    pub pending_commissions: u64,
    pub total_earnings: u64,
}

fn count_where(applications: &[Application], predicate: impl Fn(ApplicationStatus) -> bool) -> u64 {
    applications
        .iter()
        .filter(|application| predicate(application.status))
        .count() as u64
}

pub fn dashboard_stats(applications: &[Application], config: &StatsConfig) -> DashboardStats {
    let approved_or_enrolled = count_where(applications, |status| {
        matches!(
            status,
            ApplicationStatus::Approved | ApplicationStatus::Enrolled
        )
    });

    DashboardStats {
        total_applications: applications.len() as u64,
        pending_review: count_where(applications, ApplicationStatus::is_pending_review),
        total_revenue: config.revenue_baseline
            + approved_or_enrolled * config.revenue_per_admission,
        active_agents: config.active_agents,
    }
}

pub fn agent_stats(applications: &[Application], config: &StatsConfig) -> AgentStats {
    let enrolled = count_where(applications, |status| {
        status == ApplicationStatus::Enrolled
    });

    AgentStats {
        total_leads: (applications.len() as u64).max(config.leads_floor),
        conversions: enrolled.max(config.conversions_floor),
        pending_commissions: config.pending_commissions,
        total_earnings: config.total_earnings,
    }
}

/// One point of the admissions-volume chart shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTrendPoint {
    pub month: &'static str,
    pub applications: u32,
}

/// Fixed monthly applications series backing the dashboard chart. Static demo
/// data in this scope, matching the revenue baseline above.
pub fn monthly_trend() -> Vec<MonthlyTrendPoint> {
    [
        ("Jan", 40),
        ("Feb", 30),
        ("Mar", 20),
        ("Apr", 27),
        ("May", 18),
        ("Jun", 23),
        ("Jul", 34),
        ("Aug", 60),
        ("Sep", 90),
        ("Oct", 120),
    ]
    .into_iter()
    .map(|(month, applications)| MonthlyTrendPoint {
        month,
        applications,
    })
    .collect()
}
