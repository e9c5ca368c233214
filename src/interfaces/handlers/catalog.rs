use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{constants::ALL_CATEGORIES, errors::AppError, AppState};

#[derive(Debug, Deserialize)]
pub struct ProjectListQuery {
    pub category: Option<String>,
    pub q: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CourseListQuery {
    pub level: Option<String>,
    pub q: Option<String>,
}

#[instrument(skip(state, query))]
pub async fn get_projects(
    state: web::Data<AppState>,
    query: web::Query<ProjectListQuery>,
) -> Result<impl Responder, AppError> {
    let catalog = &state.catalog_handler;
    let query = query.into_inner();

    let projects = match query.author.as_deref() {
        Some(author) => catalog.projects_by_author(author).await?,
        None => {
            catalog
                .list_projects(
                    query.category.as_deref().unwrap_or(ALL_CATEGORIES),
                    query.q.as_deref().unwrap_or_default(),
                )
                .await?
        }
    };
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(project_id, state))]
pub async fn get_project_by_id(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project = state.catalog_handler.get_project(&project_id).await?;
    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(state, query))]
pub async fn get_courses(
    state: web::Data<AppState>,
    query: web::Query<CourseListQuery>,
) -> Result<impl Responder, AppError> {
    let courses = state
        .catalog_handler
        .list_courses(
            query.level.as_deref().unwrap_or(ALL_CATEGORIES),
            query.q.as_deref().unwrap_or_default(),
        )
        .await?;
    Ok(HttpResponse::Ok().json(courses))
}

#[instrument(skip(course_id, state))]
pub async fn get_course_by_id(
    course_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let course = state.catalog_handler.get_course(&course_id).await?;
    Ok(HttpResponse::Ok().json(course))
}
