use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::entities::{
    entity::{AssetLocation, EntityKind, Record, COURSE_ASSETS},
    validation::{push_unique, remove_item, validate_url},
};

/// Course level, also reused as the difficulty of a learning resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CourseLevel {
    #[default]
    #[serde(alias = "beginner")]
    Beginner,
    #[serde(alias = "intermediate")]
    Intermediate,
    #[serde(alias = "advanced")]
    Advanced,
}

impl CourseLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseLevel::Beginner => "Beginner",
            CourseLevel::Intermediate => "Intermediate",
            CourseLevel::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub instructor: String,
    pub duration: String,
    #[serde(default)]
    pub level: CourseLevel,
    #[serde(default)]
    pub lessons: u32,
    #[serde(default)]
    pub enrolled_students: u32,
    #[serde(default)]
    pub rating: f32,
    pub join_link: String,
    #[serde(default)]
    pub syllabus: Vec<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub what_you_will_learn: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Record for Course {
    const KIND: EntityKind = EntityKind::Course;
    const TABLE: &'static str = "courses";
    const ASSETS: AssetLocation = COURSE_ASSETS;
    const HAS_AVATAR: bool = true;

    type Insert = CourseInsert;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseInsert {
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub instructor: String,
    pub duration: String,
    pub level: CourseLevel,
    pub lessons: u32,
    pub join_link: String,
    pub syllabus: Vec<String>,
    pub prerequisites: Vec<String>,
    pub what_you_will_learn: Vec<String>,
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CourseDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "Full description is required"))]
    pub full_description: String,

    #[validate(length(min = 1, message = "Instructor is required"))]
    pub instructor: String,

    #[validate(length(min = 1, message = "Duration is required"))]
    pub duration: String,

    pub level: CourseLevel,
    pub lessons: u32,

    #[validate(
        length(min = 1, message = "Join link is required"),
        custom(function = "validate_url")
    )]
    pub join_link: String,

    pub syllabus: Vec<String>,
    pub prerequisites: Vec<String>,
    pub what_you_will_learn: Vec<String>,
    pub start_date: Option<NaiveDate>,
}

impl CourseDraft {
    pub fn normalized(self) -> Self {
        CourseDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            full_description: self.full_description.trim().to_string(),
            instructor: self.instructor.trim().to_string(),
            duration: self.duration.trim().to_string(),
            join_link: self.join_link.trim().to_string(),
            ..self
        }
    }

    pub fn add_syllabus_item(&mut self, item: &str) -> bool {
        push_unique(&mut self.syllabus, item)
    }

    pub fn remove_syllabus_item(&mut self, item: &str) -> bool {
        remove_item(&mut self.syllabus, item)
    }

    pub fn add_prerequisite(&mut self, item: &str) -> bool {
        push_unique(&mut self.prerequisites, item)
    }

    pub fn remove_prerequisite(&mut self, item: &str) -> bool {
        remove_item(&mut self.prerequisites, item)
    }

    pub fn add_learning_outcome(&mut self, item: &str) -> bool {
        push_unique(&mut self.what_you_will_learn, item)
    }

    pub fn remove_learning_outcome(&mut self, item: &str) -> bool {
        remove_item(&mut self.what_you_will_learn, item)
    }
}

impl TryFrom<CourseDraft> for CourseInsert {
    type Error = ValidationErrors;

    fn try_from(value: CourseDraft) -> Result<Self, Self::Error> {
        let draft = value.normalized();
        draft.validate()?;

        Ok(CourseInsert {
            title: draft.title,
            description: draft.description,
            full_description: draft.full_description,
            instructor: draft.instructor,
            duration: draft.duration,
            level: draft.level,
            lessons: draft.lessons,
            join_link: draft.join_link,
            syllabus: draft.syllabus,
            prerequisites: draft.prerequisites,
            what_you_will_learn: draft.what_you_will_learn,
            start_date: draft.start_date,
        })
    }
}
