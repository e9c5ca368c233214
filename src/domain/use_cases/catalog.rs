use tracing::instrument;

use crate::{
    entities::{course::Course, entity::Resolved, project::Project},
    errors::AppError,
    repositories::gateway::DataGateway,
    use_cases::search::filter,
    utils::valid_id::valid_entity_id,
};

/// Read side of the projects page: projects and courses.
#[derive(Clone)]
pub struct CatalogHandler {
    gateway: DataGateway,
}

impl CatalogHandler {
    pub fn new(gateway: DataGateway) -> Self {
        CatalogHandler { gateway }
    }

    #[instrument(skip(self))]
    pub async fn list_projects(&self, category: &str, query: &str) -> Result<Vec<Resolved<Project>>, AppError> {
        let projects = self.gateway.get_all::<Project>().await?;
        Ok(filter(&projects, query, category))
    }

    #[instrument(skip(self))]
    pub async fn get_project(&self, project_id: &str) -> Result<Resolved<Project>, AppError> {
        let id = valid_entity_id(project_id)?;
        self.gateway.get_by_id::<Project>(id).await
    }

    #[instrument(skip(self))]
    pub async fn projects_by_author(&self, author: &str) -> Result<Vec<Resolved<Project>>, AppError> {
        self.gateway.get_by_field::<Project>("author", author.trim()).await
    }

    /// Courses filter by level where projects filter by category.
    #[instrument(skip(self))]
    pub async fn list_courses(&self, level: &str, query: &str) -> Result<Vec<Resolved<Course>>, AppError> {
        let courses = self.gateway.get_all::<Course>().await?;
        Ok(filter(&courses, query, level))
    }

    #[instrument(skip(self))]
    pub async fn get_course(&self, course_id: &str) -> Result<Resolved<Course>, AppError> {
        let id = valid_entity_id(course_id)?;
        self.gateway.get_by_id::<Course>(id).await
    }
}
