use serde::Serialize;

use crate::{
    constants::{ALL_CATEGORIES, GLOBAL_SEARCH_LIMIT},
    entities::{
        blog_post::BlogPost,
        course::Course,
        entity::Resolved,
        project::Project,
        showcase::Resource,
    },
};

/// Fields the catalog filter looks at.
pub trait Searchable {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn category(&self) -> &str;
    fn tags(&self) -> &[String] {
        &[]
    }
}

impl Searchable for Project {
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Searchable for Course {
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn category(&self) -> &str {
        self.level.as_str()
    }
    fn tags(&self) -> &[String] {
        &self.syllabus
    }
}

impl Searchable for BlogPost {
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.excerpt
    }
    fn category(&self) -> &str {
        &self.category
    }
}

impl Searchable for Resource {
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn category(&self) -> &str {
        self.category.as_str()
    }
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl<E: Searchable> Searchable for Resolved<E> {
    fn title(&self) -> &str {
        self.record.title()
    }
    fn description(&self) -> &str {
        self.record.description()
    }
    fn category(&self) -> &str {
        self.record.category()
    }
    fn tags(&self) -> &[String] {
        self.record.tags()
    }
}

/// `"all"` matches everything. Otherwise the label matches case-insensitively, or by
/// the slug used for category buttons (`artificial-intelligence`).
pub fn matches_category(label: &str, category: &str) -> bool {
    let category = category.trim();
    category.is_empty()
        || category.eq_ignore_ascii_case(ALL_CATEGORIES)
        || label.eq_ignore_ascii_case(category)
        || slug::slugify(label) == category.to_lowercase()
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

pub fn matches_query<T: Searchable + ?Sized>(item: &T, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    contains_ignore_case(item.title(), &needle)
        || contains_ignore_case(item.description(), &needle)
        || item.tags().iter().any(|tag| contains_ignore_case(tag, &needle))
        || contains_ignore_case(item.category(), &needle)
}

/// Stable filter: the result keeps input order and only drops records.
pub fn filter<T: Searchable + Clone>(records: &[T], query: &str, category: &str) -> Vec<T> {
    records
        .iter()
        .filter(|item| matches_category(item.category(), category) && matches_query(*item, query))
        .cloned()
        .collect()
}

/// A routable part of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteSection {
    Home,
    Alumni,
    Projects,
    Team,
    Blogs,
    Resources,
    Merch,
}

impl SiteSection {
    pub fn path(&self) -> &'static str {
        match self {
            SiteSection::Home => "/",
            SiteSection::Alumni => "/alumni",
            SiteSection::Projects => "/projects",
            SiteSection::Team => "/team",
            SiteSection::Blogs => "/blogs",
            SiteSection::Resources => "/resources",
            SiteSection::Merch => "/merch",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchEntry {
    pub section: SiteSection,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub section: SiteSection,
    pub title: &'static str,
    pub description: &'static str,
    pub path: &'static str,
}

pub const SEARCH_INDEX: &[SearchEntry] = &[
    SearchEntry {
        section: SiteSection::Home,
        title: "Overview",
        description: "About the club, stats and what we work on",
        keywords: &["home", "overview", "club", "about", "stats", "members", "events", "workshops", "hackathons"],
    },
    SearchEntry {
        section: SiteSection::Projects,
        title: "Projects",
        description: "Student projects built by club members",
        keywords: &["projects", "code", "github", "ai", "machine learning", "web", "app", "demo", "open source"],
    },
    SearchEntry {
        section: SiteSection::Projects,
        title: "Courses",
        description: "Club-run courses and learning tracks",
        keywords: &["courses", "learn", "lessons", "syllabus", "instructor", "beginner", "intermediate", "advanced"],
    },
    SearchEntry {
        section: SiteSection::Blogs,
        title: "Blogs",
        description: "Articles on technology, research and community",
        keywords: &["blogs", "blog", "articles", "posts", "technology", "research", "innovation", "community", "write"],
    },
    SearchEntry {
        section: SiteSection::Alumni,
        title: "Alumni",
        description: "Where former members are now",
        keywords: &["alumni", "graduates", "batch", "career", "companies", "mentors", "network"],
    },
    SearchEntry {
        section: SiteSection::Team,
        title: "Team",
        description: "The current core team",
        keywords: &["team", "core", "leads", "president", "organizers", "contact", "members"],
    },
    SearchEntry {
        section: SiteSection::Resources,
        title: "Resources",
        description: "Documentation, tutorials, tools and templates",
        keywords: &["resources", "docs", "documentation", "tutorial", "tools", "templates", "guides", "roadmap", "cheatsheet"],
    },
    SearchEntry {
        section: SiteSection::Merch,
        title: "Merchandise",
        description: "Club hoodies, t-shirts, mugs and stickers",
        keywords: &["merch", "merchandise", "hoodie", "t-shirt", "tshirt", "mug", "stickers", "shop", "sizes"],
    },
];

/// Routes a free-text query to site sections. At most [`GLOBAL_SEARCH_LIMIT`] hits,
/// in declaration order. A blank query finds nothing.
pub fn global_search(query: &str) -> Vec<SearchHit> {
    search_in(SEARCH_INDEX, query, GLOBAL_SEARCH_LIMIT)
}

pub fn search_in(index: &[SearchEntry], query: &str, limit: usize) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    index
        .iter()
        .filter(|entry| {
            contains_ignore_case(entry.title, &needle)
                || contains_ignore_case(entry.description, &needle)
                || entry.keywords.iter().any(|k| k.contains(needle.as_str()))
        })
        .take(limit)
        .map(|entry| SearchHit {
            section: entry.section,
            title: entry.title,
            description: entry.description,
            path: entry.section.path(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        title: &'static str,
        category: &'static str,
        tags: Vec<String>,
    }

    impl Searchable for Item {
        fn title(&self) -> &str {
            self.title
        }
        fn description(&self) -> &str {
            ""
        }
        fn category(&self) -> &str {
            self.category
        }
        fn tags(&self) -> &[String] {
            &self.tags
        }
    }

    fn item(title: &'static str, category: &'static str, tags: &[&str]) -> Item {
        Item {
            title,
            category,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn catalog() -> Vec<Item> {
        vec![
            item("Quantum Computing Breakthrough", "Technology", &[]),
            item("Student Hackathon Success", "Community", &["events"]),
            item("AI in Scientific Research", "Research", &["ml"]),
            item("Green Energy Innovation", "Innovation", &[]),
            item("Cloud Native Patterns", "Technology", &["k8s"]),
            item("Open Source Month", "Community", &[]),
            item("Lab Automation", "Research", &[]),
        ]
    }

    #[test]
    fn technology_keeps_two_of_seven_in_order() {
        let hits = filter(&catalog(), "", "Technology");
        let titles: Vec<_> = hits.iter().map(|i| i.title).collect();
        assert_eq!(titles, vec!["Quantum Computing Breakthrough", "Cloud Native Patterns"]);
    }

    #[test]
    fn all_with_empty_query_is_identity() {
        assert_eq!(filter(&catalog(), "", "all"), catalog());
        assert_eq!(filter(&catalog(), "  ", "ALL"), catalog());
    }

    #[test]
    fn filter_is_idempotent() {
        let once = filter(&catalog(), "re", "Research");
        assert_eq!(filter(&once, "re", "Research"), once);
    }

    #[test]
    fn query_matches_tags_and_category_label() {
        let hits = filter(&catalog(), "K8S", "all");
        assert_eq!(hits.len(), 1);
        let hits = filter(&catalog(), "innov", "all");
        assert_eq!(hits[0].title, "Green Energy Innovation");
    }

    #[test]
    fn category_slug_is_accepted() {
        assert!(matches_category("Artificial Intelligence", "artificial-intelligence"));
        assert!(matches_category("Technology", "technology"));
        assert!(!matches_category("Technology", "research"));
    }

    #[test]
    fn global_search_caps_and_keeps_declaration_order() {
        let hits = global_search("e");
        assert_eq!(hits.len(), GLOBAL_SEARCH_LIMIT);
        assert_eq!(hits[0].section, SiteSection::Home);
    }

    #[test]
    fn global_search_routes_by_keyword() {
        let hits = global_search("Hoodie");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].path, "/merch");
        assert!(global_search("   ").is_empty());
    }
}
