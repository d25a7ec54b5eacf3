use super::common::*;
use crate::admissions::domain::{
    ApplicationId, ApplicationStatus, NewApplication, DEFAULT_COURSE_TITLE, DEFAULT_STUDENT_NAME,
    INITIAL_PROGRESS,
};
use crate::admissions::service::AdmissionsError;
use crate::admissions::store::{ApplicationStore, StoreError};
use crate::admissions::submission::{ApplicationDraft, PENDING_SELECTION};

#[test]
fn create_assigns_identity_and_initial_state() {
    let (service, _) = seeded_service();

    let record = service
        .create_application(NewApplication {
            student_name: Some("Ada Lovelace".to_string()),
            course_title: Some("Computer Science Engineering".to_string()),
            applied_date: None,
        })
        .expect("creation succeeds");

    assert_eq!(record.status, ApplicationStatus::Submitted);
    assert_eq!(record.progress, INITIAL_PROGRESS);
    assert_eq!(record.student_name, "Ada Lovelace");

    let listed = service.list_applications().expect("list succeeds");
    assert_eq!(listed.first(), Some(&record), "newest record listed first");
    assert_eq!(
        listed
            .iter()
            .filter(|existing| existing.id == record.id)
            .count(),
        1,
        "id is unique in the collection"
    );
}

#[test]
fn create_defaults_every_missing_field() {
    let (service, _) = empty_service();

    let record = service
        .create_application(NewApplication::default())
        .expect("creation succeeds");

    assert_eq!(record.student_name, DEFAULT_STUDENT_NAME);
    assert_eq!(record.course_title, DEFAULT_COURSE_TITLE);
    assert_eq!(record.applied_date, chrono::Local::now().date_naive());
}

#[test]
fn created_ids_stay_unique_across_calls() {
    let (service, _) = seeded_service();

    let first = service
        .create_application(NewApplication::default())
        .expect("create");
    let second = service
        .create_application(NewApplication::default())
        .expect("create");

    assert_ne!(first.id, second.id);
}

#[test]
fn transition_persists_the_updated_record() {
    let (service, store) = seeded_service();
    let id = ApplicationId("app-003".to_string());

    let updated = service
        .transition_status(&id, ApplicationStatus::UnderReview)
        .expect("allowed transition");

    assert_eq!(updated.status, ApplicationStatus::UnderReview);
    assert_eq!(updated.progress, 50);

    let stored = store.get(&id).expect("record present");
    assert_eq!(stored, updated);
}

#[test]
fn transition_on_unknown_id_is_not_found_and_store_is_unchanged() {
    let (service, store) = seeded_service();
    let before = store.list().expect("list");

    match service.transition_status(
        &ApplicationId("app-999".to_string()),
        ApplicationStatus::UnderReview,
    ) {
        Err(AdmissionsError::Store(StoreError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }

    assert_eq!(store.list().expect("list"), before);
}

#[test]
fn rejected_transition_leaves_store_unchanged() {
    let (service, store) = seeded_service();
    let id = ApplicationId("app-003".to_string());
    let before = store.get(&id).expect("record present");

    match service.transition_status(&id, ApplicationStatus::Enrolled) {
        Err(AdmissionsError::Lifecycle(err)) => {
            assert_eq!(err.from, ApplicationStatus::Submitted);
            assert_eq!(err.to, ApplicationStatus::Enrolled);
        }
        other => panic!("expected invalid transition, got {other:?}"),
    }

    assert_eq!(store.get(&id).expect("record present"), before);
}

#[test]
fn transition_is_idempotent_when_repeated() {
    let (service, _) = seeded_service();
    let id = ApplicationId("app-003".to_string());

    let once = service
        .transition_status(&id, ApplicationStatus::UnderReview)
        .expect("first transition");
    let twice = service
        .transition_status(&id, ApplicationStatus::UnderReview)
        .expect("repeat converges");

    assert_eq!(once, twice);
    assert_eq!(twice.progress, 50);
}

#[test]
fn submit_draft_creates_an_application_from_accumulated_fields() {
    let (service, _) = empty_service();

    let mut draft = ApplicationDraft::new();
    draft.first_name = Some("Meera".to_string());
    draft.last_name = Some("Iyer".to_string());
    draft.advance();
    draft.course_title = Some("B.Sc. Nursing".to_string());
    draft.advance();
    draft.attach_document("transcript.pdf");
    draft.advance();

    let record = service.submit_draft(draft).expect("submission succeeds");
    assert_eq!(record.student_name, "Meera Iyer");
    assert_eq!(record.course_title, "B.Sc. Nursing");
    assert_eq!(record.status, ApplicationStatus::Submitted);
    assert_eq!(record.progress, INITIAL_PROGRESS);
}

#[test]
fn submit_draft_without_course_records_pending_selection() {
    let (service, _) = empty_service();

    let record = service
        .submit_draft(ApplicationDraft::new())
        .expect("submission succeeds");
    assert_eq!(record.course_title, PENDING_SELECTION);
    assert_eq!(record.student_name, DEFAULT_STUDENT_NAME);
}
