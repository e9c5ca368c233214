use std::{sync::Arc, time::Duration};

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    constants::STATUS_DISMISS_DELAY,
    entities::asset::ImageUpload,
    errors::AppError,
    infrastructure::{preview::PreviewRegistry, scheduler::TaskScheduler},
    use_cases::submission::{
        validate_submission, FormDraft, FormImages, FormKind, SubmissionHandler, SubmissionReceipt,
    },
};

const DISMISS_SLOT: &str = "form-status-dismiss";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum FormStatus {
    Editing,
    Submitting,
    Success(String),
    Failed(String),
}

impl FormStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FormStatus::Success(_) | FormStatus::Failed(_))
    }
}

/// Everything a form screen shows besides the static layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSnapshot {
    pub status: FormStatus,
    pub draft: FormDraft,
    pub image_preview: Option<String>,
    pub avatar_preview: Option<String>,
}

struct FormSession {
    status: FormStatus,
    draft: FormDraft,
    images: FormImages,
    image_preview: Option<String>,
    avatar_preview: Option<String>,
    previews: PreviewRegistry,
    /// Bumped on teardown and reset; results from an older generation are dropped.
    generation: u64,
}

impl FormSession {
    fn new(kind: FormKind) -> Self {
        FormSession {
            status: FormStatus::Editing,
            draft: FormDraft::empty(kind),
            images: FormImages::default(),
            image_preview: None,
            avatar_preview: None,
            previews: PreviewRegistry::new(),
            generation: 0,
        }
    }

    fn clear_fields(&mut self) {
        self.draft = FormDraft::empty(self.draft.kind());
        self.images = FormImages::default();
        self.image_preview = None;
        self.avatar_preview = None;
        self.previews.release_all();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageField {
    Image,
    Avatar,
}

impl ImageField {
    fn name(&self) -> &'static str {
        match self {
            ImageField::Image => "image",
            ImageField::Avatar => "avatar",
        }
    }
}

/// Drives one admin form: `Editing -> Submitting -> Success | Failed -> Editing`.
pub struct FormController {
    session: Arc<Mutex<FormSession>>,
    handler: SubmissionHandler,
    scheduler: TaskScheduler,
    dismiss_after: Duration,
}

impl FormController {
    pub fn new(handler: SubmissionHandler, kind: FormKind) -> Self {
        FormController {
            session: Arc::new(Mutex::new(FormSession::new(kind))),
            handler,
            scheduler: TaskScheduler::new(),
            dismiss_after: STATUS_DISMISS_DELAY,
        }
    }

    pub fn with_dismiss_delay(mut self, delay: Duration) -> Self {
        self.dismiss_after = delay;
        self
    }

    pub fn kind(&self) -> FormKind {
        self.session.lock().draft.kind()
    }

    pub fn status(&self) -> FormStatus {
        self.session.lock().status.clone()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let session = self.session.lock();
        FormSnapshot {
            status: session.status.clone(),
            draft: session.draft.clone(),
            image_preview: session.image_preview.clone(),
            avatar_preview: session.avatar_preview.clone(),
        }
    }

    pub fn live_previews(&self) -> usize {
        self.session.lock().previews.live_count()
    }

    /// Edits the fields in place. Refused while a submission is in flight.
    pub fn edit(&self, apply: impl FnOnce(&mut FormDraft)) -> Result<(), AppError> {
        let mut session = self.session.lock();
        if session.status == FormStatus::Submitting {
            return Err(AppError::Conflict("Cannot edit while submitting".to_string()));
        }
        apply(&mut session.draft);
        Ok(())
    }

    /// Switches to a blank form of another kind, dropping the current fields.
    pub fn switch_kind(&self, kind: FormKind) -> Result<(), AppError> {
        let mut session = self.session.lock();
        if session.status == FormStatus::Submitting {
            return Err(AppError::Conflict("Cannot switch forms while submitting".to_string()));
        }
        session.draft = FormDraft::empty(kind);
        session.images = FormImages::default();
        session.image_preview = None;
        session.avatar_preview = None;
        session.previews.release_all();
        Ok(())
    }

    pub fn attach_image(&self, upload: ImageUpload) -> Result<String, AppError> {
        self.attach(ImageField::Image, upload)
    }

    pub fn attach_avatar(&self, upload: ImageUpload) -> Result<String, AppError> {
        self.attach(ImageField::Avatar, upload)
    }

    pub fn remove_image(&self) -> bool {
        self.detach(ImageField::Image)
    }

    pub fn remove_avatar(&self) -> bool {
        self.detach(ImageField::Avatar)
    }

    /// Type and size are checked as soon as a file is picked. A rejected file shows the
    /// error and leaves the previous selection in place.
    fn attach(&self, field: ImageField, upload: ImageUpload) -> Result<String, AppError> {
        if self.session.lock().status == FormStatus::Submitting {
            return Err(AppError::Conflict("Cannot change images while submitting".to_string()));
        }

        let validated = match upload.validate(field.name()) {
            Ok(validated) => validated,
            Err(e) => {
                self.fail(e.user_message("Invalid image"));
                return Err(e);
            }
        };

        let mut session = self.session.lock();
        if session.status == FormStatus::Submitting {
            return Err(AppError::Conflict("Cannot change images while submitting".to_string()));
        }

        let session = &mut *session;
        let (slot, preview) = match field {
            ImageField::Image => (&mut session.images.image, &mut session.image_preview),
            ImageField::Avatar => (&mut session.images.avatar, &mut session.avatar_preview),
        };
        let url = session
            .previews
            .replace(preview.as_deref(), validated.format, validated.bytes);
        *preview = Some(url.clone());
        *slot = Some(upload);
        Ok(url)
    }

    fn detach(&self, field: ImageField) -> bool {
        let mut session = self.session.lock();
        let session = &mut *session;
        let (slot, preview) = match field {
            ImageField::Image => (&mut session.images.image, &mut session.image_preview),
            ImageField::Avatar => (&mut session.images.avatar, &mut session.avatar_preview),
        };
        *slot = None;
        match preview.take() {
            Some(url) => session.previews.release(&url),
            None => false,
        }
    }

    /// Validates, then performs the two-phase write. Concurrent submits are refused with
    /// `Conflict`. A result that arrives after `teardown` is returned to the caller but
    /// leaves the form untouched.
    pub async fn submit(&self) -> Result<SubmissionReceipt, AppError> {
        let (validated, kind, generation) = {
            let mut session = self.session.lock();
            if session.status == FormStatus::Submitting {
                return Err(AppError::Conflict("A submission is already in progress".to_string()));
            }

            let kind = session.draft.kind();
            match validate_submission(session.draft.clone(), session.images.clone()) {
                Ok(validated) => {
                    self.scheduler.cancel(DISMISS_SLOT);
                    session.status = FormStatus::Submitting;
                    (validated, kind, session.generation)
                }
                Err(e) => {
                    drop(session);
                    self.fail(e.user_message(kind.failure_message()));
                    return Err(e);
                }
            }
        };

        let result = self.handler.write(validated).await;

        let mut session = self.session.lock();
        if session.generation != generation {
            debug!("Discarding submission result for a torn-down form");
            return result.map(|entity| SubmissionReceipt {
                message: kind.success_message(),
                entity,
            });
        }

        match result {
            Ok(entity) => {
                session.status = FormStatus::Success(kind.success_message().to_string());
                session.clear_fields();
                drop(session);
                self.schedule_dismiss(generation);
                Ok(SubmissionReceipt {
                    message: kind.success_message(),
                    entity,
                })
            }
            Err(e) => {
                if let AppError::UploadError { id, .. } = &e {
                    warn!(id = %id, "Row stored without its image");
                }
                session.status = FormStatus::Failed(e.user_message(kind.failure_message()));
                drop(session);
                self.schedule_dismiss(generation);
                Err(e)
            }
        }
    }

    /// Returns to `Editing` with a blank form, releasing previews and pending timers.
    /// Any submission still in flight is ignored when it completes.
    pub fn teardown(&self) {
        self.scheduler.cancel_all();
        let mut session = self.session.lock();
        session.generation += 1;
        session.status = FormStatus::Editing;
        session.clear_fields();
    }

    /// Never replaces `Submitting`; the in-flight write owns the status until it returns.
    fn fail(&self, message: String) {
        let generation = {
            let mut session = self.session.lock();
            if session.status == FormStatus::Submitting {
                return;
            }
            session.status = FormStatus::Failed(message);
            session.generation
        };
        self.schedule_dismiss(generation);
    }

    fn schedule_dismiss(&self, generation: u64) {
        let session = Arc::clone(&self.session);
        self.scheduler.schedule(DISMISS_SLOT, self.dismiss_after, move || {
            let mut session = session.lock();
            if session.generation == generation && session.status.is_terminal() {
                session.status = FormStatus::Editing;
            }
        });
    }
}

impl Drop for FormController {
    fn drop(&mut self) {
        let mut session = self.session.lock();
        session.generation += 1;
        session.previews.release_all();
    }
}
