use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::{
    entities::{
        entity::{AssetLocation, EntityKind, Record, Resolved, BLOG_ASSETS},
        validation::{validate_blog_category, validate_not_blank},
    },
    utils::markdown::safe_markdown_to_html,
};

// ───── Constants ──────────────────────────────────────────────────────
const MAX_TITLE_LENGTH: u64 = 200;
const MAX_EXCERPT_LENGTH: u64 = 500;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub full_content: String,
    pub author: String,
    pub read_time: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for BlogPost {
    const KIND: EntityKind = EntityKind::BlogPost;
    const TABLE: &'static str = "blog_posts";
    const ASSETS: AssetLocation = BLOG_ASSETS;

    type Insert = BlogPostInsert;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BlogPostInsert {
    pub title: String,
    pub excerpt: String,
    pub full_content: String,
    pub author: String,
    pub read_time: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── API Response Models ──────────────────────────────────────────
#[derive(Debug, Serialize)]
pub struct BlogPostListResponse {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub read_time: String,
    pub category: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct BlogPostDetailResponse {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content_html: String,
    pub author: String,
    pub read_time: String,
    pub category: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── Input & Validation Requests ──────────────────────────────────

/// The "write a blog post" form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BlogDraft {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_EXCERPT_LENGTH, message = "Excerpt is required"))]
    pub excerpt: String,

    #[validate(length(min = 1, message = "Full content is required"))]
    pub full_content: String,

    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,

    #[validate(length(min = 1, message = "Read time is required"))]
    pub read_time: String,

    #[validate(custom(function = "validate_blog_category"))]
    pub category: String,
}

impl Default for BlogDraft {
    fn default() -> Self {
        BlogDraft {
            title: String::new(),
            excerpt: String::new(),
            full_content: String::new(),
            author: String::new(),
            read_time: String::new(),
            category: "Technology".to_string(),
        }
    }
}

impl BlogDraft {
    pub fn normalized(self) -> Self {
        BlogDraft {
            title: self.title.trim().to_string(),
            excerpt: self.excerpt.trim().to_string(),
            full_content: self.full_content.trim().to_string(),
            author: self.author.trim().to_string(),
            read_time: self.read_time.trim().to_string(),
            category: self.category.trim().to_string(),
        }
    }
}

/// Partial update of an existing post. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateBlogPostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_not_blank"), length(max = MAX_TITLE_LENGTH))]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_not_blank"), length(max = MAX_EXCERPT_LENGTH))]
    pub excerpt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_not_blank"))]
    pub full_content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_not_blank"))]
    pub author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_not_blank"))]
    pub read_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_blog_category"))]
    pub category: Option<String>,
}

impl UpdateBlogPostRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.excerpt.is_none()
            && self.full_content.is_none()
            && self.author.is_none()
            && self.read_time.is_none()
            && self.category.is_none()
    }

    /// The JSON patch sent to the row store, with `updated_at` bumped.
    pub fn to_patch(&self) -> Result<serde_json::Value, serde_json::Error> {
        let mut patch = serde_json::to_value(self)?;
        if let Some(map) = patch.as_object_mut() {
            map.insert("updated_at".to_string(), serde_json::to_value(Utc::now())?);
        }
        Ok(patch)
    }
}

// ───── Conversions ──────────────────────────────────────────────────

impl TryFrom<BlogDraft> for BlogPostInsert {
    type Error = ValidationErrors;

    fn try_from(value: BlogDraft) -> Result<Self, Self::Error> {
        let draft = value.normalized();
        draft.validate()?;

        let now = Utc::now();
        Ok(BlogPostInsert {
            title: draft.title,
            excerpt: draft.excerpt,
            full_content: draft.full_content,
            author: draft.author,
            read_time: draft.read_time,
            category: draft.category,
            created_at: now,
            updated_at: now,
        })
    }
}

impl Resolved<BlogPost> {
    pub fn to_list_response(&self) -> BlogPostListResponse {
        let post = &self.record;
        BlogPostListResponse {
            id: post.id.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            author: post.author.clone(),
            read_time: post.read_time.clone(),
            category: post.category.clone(),
            image_url: self.image_url.clone(),
            created_at: post.created_at,
        }
    }

    pub fn to_detail_response(&self) -> BlogPostDetailResponse {
        let post = &self.record;
        BlogPostDetailResponse {
            id: post.id.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content_html: safe_markdown_to_html(&post.full_content),
            author: post.author.clone(),
            read_time: post.read_time.clone(),
            category: post.category.clone(),
            image_url: self.image_url.clone(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_required_field_has_its_own_message() {
        let draft = BlogDraft {
            title: "Quantum Computing Breakthrough".into(),
            excerpt: "Promising results".into(),
            full_content: "   ".into(),
            author: "Alex Johnson".into(),
            read_time: "5 min read".into(),
            ..BlogDraft::default()
        };
        let errors = BlogPostInsert::try_from(draft).unwrap_err();
        let field = errors.field_errors();
        let message = field["full_content"][0].message.as_deref();
        assert_eq!(message, Some("Full content is required"));
    }

    #[test]
    fn patch_only_carries_set_fields() {
        let update = UpdateBlogPostRequest {
            title: Some("New title".into()),
            ..Default::default()
        };
        let patch = update.to_patch().unwrap();
        let map = patch.as_object().unwrap();
        assert_eq!(map["title"], "New title");
        assert!(map.contains_key("updated_at"));
        assert!(!map.contains_key("excerpt"));
    }

    #[test]
    fn detail_response_renders_markdown() {
        let now = Utc::now();
        let resolved = Resolved {
            record: BlogPost {
                id: "b1".into(),
                title: "AI in Scientific Research".into(),
                excerpt: "ML in research".into(),
                full_content: "# Heading\n\n<script>alert(1)</script>text".into(),
                author: "Maya Patel".into(),
                read_time: "6 min read".into(),
                category: "Innovation".into(),
                created_at: now,
                updated_at: now,
            },
            image_url: "https://cdn.example/b1.jpg".into(),
            avatar_url: None,
        };
        let detail = resolved.to_detail_response();
        assert!(detail.content_html.contains("<h1>Heading</h1>"));
        assert!(!detail.content_html.contains("<script>"));
    }
}
