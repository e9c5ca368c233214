use actix_multipart::form::{json::Json as MpJson, tempfile::TempFile, MultipartForm};
use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{
        asset::ImageUpload,
        blog_post::{BlogDraft, UpdateBlogPostRequest},
        course::CourseDraft,
        project::ProjectDraft,
    },
    errors::AppError,
    use_cases::submission::{FormDraft, FormImages},
    AppState,
};

// Parts are capped above the 5MB image rule so oversized files still reach
// validation and get the field-level message.

#[derive(Debug, MultipartForm)]
pub struct ProjectUpload {
    #[multipart(rename = "data")]
    pub data: MpJson<ProjectDraft>,
    #[multipart(limit = "8MB")]
    pub image: Option<TempFile>,
    #[multipart(limit = "8MB")]
    pub avatar: Option<TempFile>,
}

#[derive(Debug, MultipartForm)]
pub struct CourseUpload {
    #[multipart(rename = "data")]
    pub data: MpJson<CourseDraft>,
    #[multipart(limit = "8MB")]
    pub image: Option<TempFile>,
    #[multipart(limit = "8MB")]
    pub avatar: Option<TempFile>,
}

#[derive(Debug, MultipartForm)]
pub struct BlogUpload {
    #[multipart(rename = "data")]
    pub data: MpJson<BlogDraft>,
    #[multipart(limit = "8MB")]
    pub image: Option<TempFile>,
}

async fn read_upload(file: Option<TempFile>) -> Result<Option<ImageUpload>, AppError> {
    let Some(file) = file else {
        return Ok(None);
    };

    let bytes = tokio::fs::read(file.file.path()).await.map_err(|e| {
        tracing::error!("Failed to read uploaded file: {}", e);
        AppError::InternalError("Failed to read uploaded file".to_string())
    })?;

    let file_name = file.file_name.unwrap_or_else(|| "upload".to_string());
    let declared_type = file.content_type.map(|mime| mime.essence_str().to_string());

    Ok(Some(ImageUpload::new(&file_name, declared_type, bytes)))
}

async fn submit(state: &AppState, draft: FormDraft, images: FormImages) -> Result<HttpResponse, AppError> {
    let receipt = state.submission_handler.submit(draft, images).await?;
    Ok(HttpResponse::Created().json(receipt))
}

#[instrument(skip(state, form))]
pub async fn create_project(
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<ProjectUpload>,
) -> Result<impl Responder, AppError> {
    let images = FormImages {
        image: read_upload(form.image).await?,
        avatar: read_upload(form.avatar).await?,
    };
    submit(&state, FormDraft::Project(form.data.into_inner()), images).await
}

#[instrument(skip(state, form))]
pub async fn create_course(
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<CourseUpload>,
) -> Result<impl Responder, AppError> {
    let images = FormImages {
        image: read_upload(form.image).await?,
        avatar: read_upload(form.avatar).await?,
    };
    submit(&state, FormDraft::Course(form.data.into_inner()), images).await
}

#[instrument(skip(state, form))]
pub async fn create_blog_post(
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<BlogUpload>,
) -> Result<impl Responder, AppError> {
    let images = FormImages {
        image: read_upload(form.image).await?,
        avatar: None,
    };
    submit(&state, FormDraft::Blog(form.data.into_inner()), images).await
}

#[instrument(skip(post_id, state, data))]
pub async fn update_blog_post(
    post_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateBlogPostRequest>,
) -> Result<impl Responder, AppError> {
    let updated = state
        .blog_handler
        .update_blog_post(&post_id, &data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated.to_detail_response()))
}

#[instrument(skip(post_id, state))]
pub async fn delete_blog_post(
    post_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.blog_handler.delete_blog_post(&post_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
