use super::common::*;
use crate::admissions::domain::ApplicationStatus;
use crate::admissions::stats::{agent_stats, dashboard_stats, monthly_trend};

#[test]
fn dashboard_counts_and_revenue_follow_the_collection() {
    let applications = mixed_applications();
    let config = stats_config();

    let stats = dashboard_stats(&applications, &config);

    assert_eq!(stats.total_applications, 5);
    assert_eq!(stats.pending_review, 1);
    assert_eq!(
        stats.total_revenue,
        config.revenue_baseline + 2 * config.revenue_per_admission,
        "two approved applications contribute revenue"
    );
    assert_eq!(stats.active_agents, config.active_agents);
}

#[test]
fn dashboard_over_empty_collection_keeps_the_baseline() {
    let config = stats_config();
    let stats = dashboard_stats(&[], &config);

    assert_eq!(stats.total_applications, 0);
    assert_eq!(stats.pending_review, 0);
    assert_eq!(stats.total_revenue, config.revenue_baseline);
}

#[test]
fn enrolled_applications_count_toward_revenue() {
    let config = stats_config();
    let mut applications = mixed_applications();
    applications.push(application("app-106", ApplicationStatus::Enrolled, 100));

    let stats = dashboard_stats(&applications, &config);
    assert_eq!(
        stats.total_revenue,
        config.revenue_baseline + 3 * config.revenue_per_admission
    );
}

#[test]
fn agent_stats_never_regress_below_the_floors() {
    let config = stats_config();
    let stats = agent_stats(&mixed_applications(), &config);

    assert_eq!(stats.total_leads, config.leads_floor);
    assert_eq!(stats.conversions, config.conversions_floor);
    assert_eq!(stats.pending_commissions, config.pending_commissions);
    assert_eq!(stats.total_earnings, config.total_earnings);
}

#[test]
fn agent_stats_use_real_counts_above_the_floors() {
    let mut config = stats_config();
    config.leads_floor = 2;
    config.conversions_floor = 0;

    let mut applications = mixed_applications();
    applications.push(application("app-106", ApplicationStatus::Enrolled, 100));

    let stats = agent_stats(&applications, &config);
    assert_eq!(stats.total_leads, 6);
    assert_eq!(stats.conversions, 1);
}

#[test]
fn monthly_trend_is_a_fixed_ten_month_series() {
    let trend = monthly_trend();
    assert_eq!(trend.len(), 10);
    assert_eq!(trend.first().map(|point| point.month), Some("Jan"));
    assert_eq!(trend.last().map(|point| point.applications), Some(120));
}
