use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::entities::{
    entity::{AssetLocation, EntityKind, Record, PROJECT_ASSETS},
    validation::{non_empty, push_unique, remove_item, validate_url},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectStatus {
    Completed,
    #[default]
    #[serde(rename = "In Progress")]
    InProgress,
    Planned,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub category: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub github_link: Option<String>,
    pub live_demo: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    pub date: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for Project {
    const KIND: EntityKind = EntityKind::Project;
    const TABLE: &'static str = "projects";
    const ASSETS: AssetLocation = PROJECT_ASSETS;
    const HAS_AVATAR: bool = true;

    type Insert = ProjectInsert;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectInsert {
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub category: String,
    pub author: String,
    pub tags: Vec<String>,
    pub github_link: Option<String>,
    pub live_demo: Option<String>,
    pub tech_stack: Vec<String>,
    pub features: Vec<String>,
    pub status: ProjectStatus,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The admin "add project" form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProjectDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "Full description is required"))]
    pub full_description: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,

    pub tags: Vec<String>,

    #[validate(custom(function = "validate_url"))]
    pub github_link: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub live_demo: Option<String>,

    pub tech_stack: Vec<String>,
    pub features: Vec<String>,
    pub status: ProjectStatus,
    pub date: NaiveDate,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        ProjectDraft {
            title: String::new(),
            description: String::new(),
            full_description: String::new(),
            category: String::new(),
            author: String::new(),
            tags: Vec::new(),
            github_link: None,
            live_demo: None,
            tech_stack: Vec::new(),
            features: Vec::new(),
            status: ProjectStatus::InProgress,
            date: Utc::now().date_naive(),
        }
    }
}

impl ProjectDraft {
    /// Trims every text input and turns empty links into `None`.
    pub fn normalized(self) -> Self {
        ProjectDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            full_description: self.full_description.trim().to_string(),
            category: self.category.trim().to_string(),
            author: self.author.trim().to_string(),
            github_link: non_empty(self.github_link),
            live_demo: non_empty(self.live_demo),
            ..self
        }
    }

    pub fn add_tag(&mut self, tag: &str) -> bool {
        push_unique(&mut self.tags, tag)
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        remove_item(&mut self.tags, tag)
    }

    pub fn add_tech(&mut self, tech: &str) -> bool {
        push_unique(&mut self.tech_stack, tech)
    }

    pub fn remove_tech(&mut self, tech: &str) -> bool {
        remove_item(&mut self.tech_stack, tech)
    }

    pub fn add_feature(&mut self, feature: &str) -> bool {
        push_unique(&mut self.features, feature)
    }

    pub fn remove_feature(&mut self, feature: &str) -> bool {
        remove_item(&mut self.features, feature)
    }
}

impl TryFrom<ProjectDraft> for ProjectInsert {
    type Error = ValidationErrors;

    fn try_from(value: ProjectDraft) -> Result<Self, Self::Error> {
        let draft = value.normalized();
        draft.validate()?;

        let now = Utc::now();
        Ok(ProjectInsert {
            title: draft.title,
            description: draft.description,
            full_description: draft.full_description,
            category: draft.category,
            author: draft.author,
            tags: draft.tags,
            github_link: draft.github_link,
            live_demo: draft.live_demo,
            tech_stack: draft.tech_stack,
            features: draft.features,
            status: draft.status,
            date: draft.date,
            created_at: now,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProjectDraft {
        ProjectDraft {
            title: " Campus Assistant ".into(),
            description: "Chatbot for campus life".into(),
            full_description: "An intelligent campus assistant".into(),
            category: "Artificial Intelligence".into(),
            author: "Priya Sharma".into(),
            github_link: Some("".into()),
            ..ProjectDraft::default()
        }
    }

    #[test]
    fn status_uses_display_names_on_the_wire() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let parsed: ProjectStatus = serde_json::from_str("\"Planned\"").unwrap();
        assert_eq!(parsed, ProjectStatus::Planned);
    }

    #[test]
    fn insert_trims_and_drops_empty_links() {
        let insert = ProjectInsert::try_from(draft()).unwrap();
        assert_eq!(insert.title, "Campus Assistant");
        assert_eq!(insert.github_link, None);
    }

    #[test]
    fn blank_author_is_rejected() {
        let mut d = draft();
        d.author = "   ".into();
        let errors = ProjectInsert::try_from(d).unwrap_err();
        assert!(errors.field_errors().contains_key("author"));
    }

    #[test]
    fn bad_link_is_rejected() {
        let mut d = draft();
        d.live_demo = Some("campus-ai".into());
        assert!(ProjectInsert::try_from(d).is_err());
    }
}
