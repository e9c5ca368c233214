mod test_utils;

use std::time::Duration;

use club_site::{
    constants::{CAROUSEL_TRANSITION, PLACEHOLDER_IMAGE, STATUS_DISMISS_DELAY},
    entities::asset::ImageUpload,
    errors::AppError,
    repositories::gateway::DataGateway,
    use_cases::{
        carousel::Carousel,
        form_flow::{FormController, FormStatus},
        submission::{FormDraft, FormKind, SubmissionHandler},
    },
};
use test_utils::{png_bytes, InMemoryBackend};

async fn until_insert_started(backend: &InMemoryBackend) {
    while backend.insert_count() == 0 {
        tokio::task::yield_now().await;
    }
}

fn controller(backend: &std::sync::Arc<InMemoryBackend>, kind: FormKind) -> FormController {
    let gateway = DataGateway::new(backend.clone(), backend.clone(), PLACEHOLDER_IMAGE);
    FormController::new(SubmissionHandler::new(gateway), kind)
}

fn fill_course(form: &FormController) {
    form.edit(|draft| {
        if let FormDraft::Course(course) = draft {
            course.title = "Full-Stack Web Development".into();
            course.description = "From HTML to deployment".into();
            course.full_description = "Twelve weeks of building".into();
            course.instructor = "Rahul Nair".into();
            course.duration = "12 weeks".into();
            course.join_link = "https://forms.example.org/fullstack".into();
        }
    })
    .unwrap();
}

#[tokio::test(start_paused = true)]
async fn course_submission_succeeds_and_status_clears() {
    let backend = InMemoryBackend::new();
    backend.assign_ids(&["c-9"]);
    let form = controller(&backend, FormKind::Course);
    fill_course(&form);
    form.attach_image(ImageUpload::new("cover.png", None, png_bytes(256))).unwrap();

    let receipt = form.submit().await.unwrap();
    assert_eq!(receipt.entity.id(), "c-9");
    assert!(backend.has_object("images", "courses/c-9.png"));
    assert_eq!(form.status(), FormStatus::Success("Course added successfully!".into()));
    assert_eq!(form.snapshot().draft, FormDraft::empty(FormKind::Course));

    tokio::time::sleep(STATUS_DISMISS_DELAY + Duration::from_millis(1)).await;
    assert_eq!(form.status(), FormStatus::Editing);
}

#[tokio::test(start_paused = true)]
async fn upload_failure_keeps_row_and_shows_generic_message() {
    let backend = InMemoryBackend::new();
    backend.assign_ids(&["abc-123"]);
    backend.fail_uploads(true);
    let form = controller(&backend, FormKind::Course);
    fill_course(&form);
    form.attach_image(ImageUpload::new("cover.png", None, png_bytes(256))).unwrap();

    let err = form.submit().await.unwrap_err();
    assert_eq!(
        err,
        AppError::UploadError {
            id: "abc-123".into(),
            message: "Backend responded with 503: storage unavailable".into(),
        }
    );
    assert_eq!(form.status(), FormStatus::Failed("Failed to add course. Please try again.".into()));
    assert_eq!(backend.rows("courses").len(), 1);

    // fields are kept so the visitor can retry
    match form.snapshot().draft {
        FormDraft::Course(course) => assert_eq!(course.instructor, "Rahul Nair"),
        other => panic!("unexpected draft {other:?}"),
    }
}

#[tokio::test]
async fn oversized_image_never_reaches_backend() {
    let backend = InMemoryBackend::new();
    let form = controller(&backend, FormKind::Project);

    let err = form
        .attach_image(ImageUpload::new("huge.png", None, png_bytes(6 * 1024 * 1024)))
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
    assert_eq!(form.live_previews(), 0);

    assert!(form.submit().await.is_err());
    assert_eq!(backend.insert_count(), 0);
    assert_eq!(backend.upload_count(), 0);
}

#[tokio::test]
async fn second_submit_is_refused_while_first_is_in_flight() {
    let backend = InMemoryBackend::new();
    let gate = backend.hold_inserts();
    let form = controller(&backend, FormKind::Course);
    fill_course(&form);

    let (first, second) = tokio::join!(form.submit(), async {
        until_insert_started(&backend).await;
        assert_eq!(form.status(), FormStatus::Submitting);
        let second = form.submit().await;
        gate.notify_one();
        second
    });

    assert!(first.is_ok());
    assert!(matches!(second, Err(AppError::Conflict(_))));
    assert_eq!(backend.insert_count(), 1);
    assert_eq!(backend.rows("courses").len(), 1);
}

#[tokio::test]
async fn rejected_attach_mid_submit_keeps_the_submission_guard() {
    let backend = InMemoryBackend::new();
    let gate = backend.hold_inserts();
    let form = controller(&backend, FormKind::Course);
    fill_course(&form);

    let (first, (attached, second)) = tokio::join!(form.submit(), async {
        until_insert_started(&backend).await;
        let attached = form.attach_image(ImageUpload::new("huge.png", None, png_bytes(6 * 1024 * 1024)));
        assert_eq!(form.status(), FormStatus::Submitting);
        let second = form.submit().await;
        gate.notify_one();
        (attached, second)
    });

    assert!(matches!(attached, Err(AppError::Conflict(_))));
    assert!(matches!(second, Err(AppError::Conflict(_))));
    assert!(first.is_ok());
    assert_eq!(backend.insert_count(), 1);
    assert_eq!(form.status(), FormStatus::Success("Course added successfully!".into()));
}

#[tokio::test]
async fn teardown_mid_submit_ignores_the_late_result() {
    let backend = InMemoryBackend::new();
    backend.assign_ids(&["c-late"]);
    let gate = backend.hold_inserts();
    let form = controller(&backend, FormKind::Course);
    fill_course(&form);

    let (result, ()) = tokio::join!(form.submit(), async {
        until_insert_started(&backend).await;
        form.teardown();
        gate.notify_one();
    });

    // the write itself completes and is reported to the caller
    assert_eq!(result.unwrap().entity.id(), "c-late");
    assert_eq!(form.status(), FormStatus::Editing);
    assert_eq!(form.snapshot().draft, FormDraft::empty(FormKind::Course));
    assert_eq!(form.snapshot().image_preview, None);
}

#[tokio::test(start_paused = true)]
async fn carousel_wraps_forward_and_locks_during_transition() {
    let carousel = Carousel::starting_at(vec!["a", "b", "c"], 1);

    assert!(carousel.next());
    assert_eq!(carousel.current(), Some(&"c"));
    assert!(!carousel.next(), "input is ignored mid-transition");

    tokio::time::sleep(CAROUSEL_TRANSITION + Duration::from_millis(1)).await;
    assert!(carousel.next());
    assert_eq!(carousel.current(), Some(&"a"));

    tokio::time::sleep(CAROUSEL_TRANSITION + Duration::from_millis(1)).await;
    assert!(carousel.next());
    assert_eq!(carousel.current(), Some(&"b"));
}
