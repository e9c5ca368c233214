use serde::{de::DeserializeOwned, Serialize};

use crate::{
    constants::{BLOGS_BUCKET, IMAGES_BUCKET},
    entities::{blog_post::BlogPost, course::Course, project::Project, showcase::TeamMember},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Project,
    Course,
    BlogPost,
    Alumni,
    TeamMember,
    Resource,
    Merch,
}

impl EntityKind {
    /// Backing table for kinds stored in the hosted backend. Literal page content has none.
    pub fn table(&self) -> Option<&'static str> {
        match self {
            EntityKind::Project => Some(Project::TABLE),
            EntityKind::Course => Some(Course::TABLE),
            EntityKind::BlogPost => Some(BlogPost::TABLE),
            EntityKind::Alumni
            | EntityKind::TeamMember
            | EntityKind::Resource
            | EntityKind::Merch => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Project => "project",
            EntityKind::Course => "course",
            EntityKind::BlogPost => "blog post",
            EntityKind::Alumni => "alumni member",
            EntityKind::TeamMember => "team member",
            EntityKind::Resource => "resource",
            EntityKind::Merch => "product",
        }
    }
}

/// Where the image of a stored entity lives: `<bucket>/[<folder>/]<id>.<ext>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetLocation {
    pub bucket: &'static str,
    pub folder: Option<&'static str>,
}

impl AssetLocation {
    pub const fn new(bucket: &'static str, folder: Option<&'static str>) -> Self {
        AssetLocation { bucket, folder }
    }

    pub fn key(&self, stem: &str, extension: &str) -> String {
        storage_key(self.folder, stem, extension)
    }
}

pub fn storage_key(folder: Option<&str>, stem: &str, extension: &str) -> String {
    match folder {
        Some(folder) => format!("{folder}/{stem}.{extension}"),
        None => format!("{stem}.{extension}"),
    }
}

/// Avatars sit at the root of the images bucket as `<id>_avatar.<ext>`.
pub const AVATAR_LOCATION: AssetLocation = AssetLocation::new(IMAGES_BUCKET, None);

pub fn avatar_stem(id: &str) -> String {
    format!("{id}_avatar")
}

pub const PROJECT_ASSETS: AssetLocation = AssetLocation::new(IMAGES_BUCKET, Some("projects"));
pub const COURSE_ASSETS: AssetLocation = AssetLocation::new(IMAGES_BUCKET, Some("courses"));
pub const BLOG_ASSETS: AssetLocation = AssetLocation::new(BLOGS_BUCKET, None);

/// A row type persisted in the hosted backend.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const KIND: EntityKind;
    const TABLE: &'static str;
    const ASSETS: AssetLocation;
    /// Whether an `<id>_avatar` image is probed alongside the main image.
    const HAS_AVATAR: bool = false;

    type Insert: Serialize + Send + Sync;

    fn id(&self) -> &str;
}

/// A stored row together with the image URLs derived from its id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolved<E> {
    #[serde(flatten)]
    pub record: E,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl<E: Record> Resolved<E> {
    pub fn id(&self) -> &str {
        self.record.id()
    }
}

/// Anything the detail view can expand. The variant carries the kind, so render and
/// dispatch sites match exhaustively instead of probing fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "item", rename_all = "snake_case")]
pub enum Entity {
    Project(Resolved<Project>),
    Course(Resolved<Course>),
    BlogPost(Resolved<BlogPost>),
    TeamMember(TeamMember),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Project(_) => EntityKind::Project,
            Entity::Course(_) => EntityKind::Course,
            Entity::BlogPost(_) => EntityKind::BlogPost,
            Entity::TeamMember(_) => EntityKind::TeamMember,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Entity::Project(p) => p.id(),
            Entity::Course(c) => c.id(),
            Entity::BlogPost(b) => b.id(),
            Entity::TeamMember(m) => &m.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Entity::Project(p) => &p.record.title,
            Entity::Course(c) => &c.record.title,
            Entity::BlogPost(b) => &b.record.title,
            Entity::TeamMember(m) => &m.name,
        }
    }
}

impl From<Resolved<Project>> for Entity {
    fn from(value: Resolved<Project>) -> Self {
        Entity::Project(value)
    }
}

impl From<Resolved<Course>> for Entity {
    fn from(value: Resolved<Course>) -> Self {
        Entity::Course(value)
    }
}

impl From<Resolved<BlogPost>> for Entity {
    fn from(value: Resolved<BlogPost>) -> Self {
        Entity::BlogPost(value)
    }
}

impl From<TeamMember> for Entity {
    fn from(value: TeamMember) -> Self {
        Entity::TeamMember(value)
    }
}
