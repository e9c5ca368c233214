use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::{
    entities::{
        asset::ImageUpload,
        blog_post::{BlogDraft, BlogPost, BlogPostInsert},
        course::{Course, CourseDraft, CourseInsert},
        entity::Entity,
        project::{Project, ProjectDraft, ProjectInsert},
    },
    errors::AppError,
    repositories::gateway::{DataGateway, PendingAsset},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Project,
    Course,
    Blog,
}

impl FormKind {
    pub fn success_message(&self) -> &'static str {
        match self {
            FormKind::Project => "Project added successfully!",
            FormKind::Course => "Course added successfully!",
            FormKind::Blog => "Blog post created successfully!",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            FormKind::Project => "Failed to add project. Please try again.",
            FormKind::Course => "Failed to add course. Please try again.",
            FormKind::Blog => "Failed to create blog post. Please try again.",
        }
    }

    pub fn accepts_avatar(&self) -> bool {
        !matches!(self, FormKind::Blog)
    }
}

/// The field values of one of the admin forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "fields", rename_all = "snake_case")]
pub enum FormDraft {
    Project(ProjectDraft),
    Course(CourseDraft),
    Blog(BlogDraft),
}

impl FormDraft {
    pub fn kind(&self) -> FormKind {
        match self {
            FormDraft::Project(_) => FormKind::Project,
            FormDraft::Course(_) => FormKind::Course,
            FormDraft::Blog(_) => FormKind::Blog,
        }
    }

    /// A blank form of the given kind.
    pub fn empty(kind: FormKind) -> Self {
        match kind {
            FormKind::Project => FormDraft::Project(ProjectDraft::default()),
            FormKind::Course => FormDraft::Course(CourseDraft::default()),
            FormKind::Blog => FormDraft::Blog(BlogDraft::default()),
        }
    }
}

/// Files picked alongside the form fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormImages {
    pub image: Option<ImageUpload>,
    pub avatar: Option<ImageUpload>,
}

/// A draft that passed every local check and is ready for the two-phase write.
#[derive(Debug, Clone)]
pub enum ValidatedSubmission {
    Project(ProjectInsert, Vec<PendingAsset>),
    Course(CourseInsert, Vec<PendingAsset>),
    Blog(BlogPostInsert, Vec<PendingAsset>),
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub message: &'static str,
    #[serde(flatten)]
    pub entity: Entity,
}

/// Local validation of a draft and its images. Never touches the network.
pub fn validate_submission(draft: FormDraft, images: FormImages) -> Result<ValidatedSubmission, AppError> {
    let kind = draft.kind();
    let mut assets = Vec::new();

    match &images.image {
        Some(image) => assets.push(PendingAsset::main(image.validate("image")?)),
        None if kind == FormKind::Blog => {
            return Err(AppError::validation("image", "Please select an image for the blog post"));
        }
        None => {}
    }

    if let Some(avatar) = &images.avatar {
        if kind.accepts_avatar() {
            assets.push(PendingAsset::avatar(avatar.validate("avatar")?));
        } else {
            warn!("Ignoring avatar attached to a blog post");
        }
    }

    Ok(match draft {
        FormDraft::Project(d) => ValidatedSubmission::Project(ProjectInsert::try_from(d)?, assets),
        FormDraft::Course(d) => ValidatedSubmission::Course(CourseInsert::try_from(d)?, assets),
        FormDraft::Blog(d) => ValidatedSubmission::Blog(BlogPostInsert::try_from(d)?, assets),
    })
}

/// Runs the admin forms against the data gateway.
#[derive(Clone)]
pub struct SubmissionHandler {
    gateway: DataGateway,
}

impl SubmissionHandler {
    pub fn new(gateway: DataGateway) -> Self {
        SubmissionHandler { gateway }
    }

    /// Validates locally, then inserts the row and uploads its images keyed by the new
    /// id. A validation failure returns before any gateway call.
    #[instrument(skip(self, draft, images), fields(kind = ?draft.kind()))]
    pub async fn submit(&self, draft: FormDraft, images: FormImages) -> Result<SubmissionReceipt, AppError> {
        let kind = draft.kind();
        let validated = validate_submission(draft, images)?;
        let entity = self.write(validated).await?;

        info!(id = entity.id(), "Form submission stored");
        Ok(SubmissionReceipt {
            message: kind.success_message(),
            entity,
        })
    }

    pub async fn write(&self, validated: ValidatedSubmission) -> Result<Entity, AppError> {
        let entity = match validated {
            ValidatedSubmission::Project(insert, assets) => {
                self.gateway.create::<Project>(&insert, assets).await?.into()
            }
            ValidatedSubmission::Course(insert, assets) => {
                self.gateway.create::<Course>(&insert, assets).await?.into()
            }
            ValidatedSubmission::Blog(insert, assets) => {
                self.gateway.create::<BlogPost>(&insert, assets).await?.into()
            }
        };
        Ok(entity)
    }
}
