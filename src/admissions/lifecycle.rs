use super::domain::{Application, ApplicationStatus};

/// Error raised when a requested transition is not on the allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid transition from {} to {}", from.label(), to.label())]
pub struct InvalidTransition {
    pub from: ApplicationStatus,
    pub to: ApplicationStatus,
}

/// Progress resulting from an allowed `(from, to)` transition, or `None` when
/// the pair is not allowed.
///
/// The table is a strict allow-list: skipping states (e.g. Submitted straight
/// to Enrolled) and leaving a terminal state both fail closed. Rejection is
/// reachable from every non-terminal state.
fn transition_progress(from: ApplicationStatus, to: ApplicationStatus) -> Option<u8> {
    use ApplicationStatus::*;

    match (from, to) {
        (Submitted, UnderReview) => Some(50),
        (UnderReview, Approved) => Some(80),
        (Approved, Enrolled) => Some(100),
        (from, Rejected) if !from.is_terminal() => Some(100),
        _ => None,
    }
}

/// Apply a status transition to an application, returning the updated record.
///
/// Requesting the status the application already has is an idempotent no-op:
/// repeated delivery of the same request converges on one final state instead
/// of erroring. Every other pair outside the allow-list is rejected and the
/// record is left untouched.
pub fn apply_transition(
    mut application: Application,
    target: ApplicationStatus,
) -> Result<Application, InvalidTransition> {
    if application.status == target {
        return Ok(application);
    }

    let progress = transition_progress(application.status, target).ok_or(InvalidTransition {
        from: application.status,
        to: target,
    })?;

    application.status = target;
    application.progress = progress;
    Ok(application)
}
