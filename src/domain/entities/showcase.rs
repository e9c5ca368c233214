//! Presentation-only records. These live in the binary as literals and are never
//! written to the backend.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::entities::course::CourseLevel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlumniMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub batch: String,
    pub passout_year: String,
    pub image: String,
    pub linkedin: Option<String>,
    pub email: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub description: String,
    pub image: String,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub email: Option<String>,
    pub year: String,
    pub department: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResourceCategory {
    Documentation,
    Tutorial,
    Tool,
    Template,
    Course,
    Article,
}

impl ResourceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::Documentation => "Documentation",
            ResourceCategory::Tutorial => "Tutorial",
            ResourceCategory::Tool => "Tool",
            ResourceCategory::Template => "Template",
            ResourceCategory::Course => "Course",
            ResourceCategory::Article => "Article",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Pdf,
    Video,
    Website,
    Github,
    Download,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ResourceCategory,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub url: String,
    pub image: String,
    pub author: String,
    pub date: String,
    pub rating: f32,
    pub views: u32,
    pub tags: Vec<String>,
    pub difficulty: CourseLevel,
    pub is_featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeDetail {
    pub size: String,
    pub measurements: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MerchProduct {
    pub id: String,
    pub name: String,
    pub price: String,
    pub material: String,
    pub front_image: String,
    pub back_image: String,
    pub description: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub sizes: Vec<String>,
    pub size_details: Vec<SizeDetail>,
}

impl MerchProduct {
    pub fn measurements(&self, size: &str) -> Option<&BTreeMap<String, String>> {
        self.size_details
            .iter()
            .find(|detail| detail.size == size)
            .map(|detail| &detail.measurements)
    }
}
