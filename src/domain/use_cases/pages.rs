//! Per-page controllers. Each page owns its state and composes the carousel, the
//! catalog filter and the detail view; nothing is shared between pages.

use serde::{Deserialize, Serialize};

use crate::{
    constants::ALL_CATEGORIES,
    content::{ALUMNI, ALUMNI_START_INDEX, MERCH, RESOURCES, TEAM},
    entities::{
        blog_post::BlogPost,
        course::{Course, CourseLevel},
        entity::{Entity, Resolved},
        project::Project,
        showcase::{AlumniMember, MerchProduct, Resource, TeamMember},
    },
    use_cases::{
        carousel::{Carousel, CarouselState},
        search::{filter, matches_category, matches_query},
        view_switcher::{DetailView, Layout},
    },
};

/// Category and text filter as typed into a page's search bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub category: String,
    pub query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            category: ALL_CATEGORIES.to_string(),
            query: String::new(),
        }
    }
}

pub struct BlogsPage {
    posts: Vec<Resolved<BlogPost>>,
    filter: FilterState,
    detail: DetailView,
}

impl BlogsPage {
    pub fn new(posts: Vec<Resolved<BlogPost>>) -> Self {
        BlogsPage {
            posts,
            filter: FilterState::default(),
            detail: DetailView::new(),
        }
    }

    pub fn set_category(&mut self, category: &str) {
        self.filter.category = category.to_string();
    }

    pub fn set_query(&mut self, query: &str) {
        self.filter.query = query.to_string();
    }

    pub fn visible(&self) -> Vec<Resolved<BlogPost>> {
        filter(&self.posts, &self.filter.query, &self.filter.category)
    }

    pub fn open(&mut self, id: &str) -> bool {
        match self.posts.iter().find(|p| p.id() == id) {
            Some(post) => {
                self.detail.select(post.clone());
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.detail.clear();
    }

    pub fn layout(&self) -> Layout {
        self.detail.layout()
    }

    pub fn selected(&self) -> Option<&Entity> {
        self.detail.selected()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogTab {
    #[default]
    Projects,
    Courses,
}

/// Projects and courses share one page with a tab switch.
pub struct ProjectsPage {
    projects: Vec<Resolved<Project>>,
    courses: Vec<Resolved<Course>>,
    tab: CatalogTab,
    filter: FilterState,
    detail: DetailView,
}

impl ProjectsPage {
    pub fn new(projects: Vec<Resolved<Project>>, courses: Vec<Resolved<Course>>) -> Self {
        ProjectsPage {
            projects,
            courses,
            tab: CatalogTab::default(),
            filter: FilterState::default(),
            detail: DetailView::new(),
        }
    }

    pub fn tab(&self) -> CatalogTab {
        self.tab
    }

    /// Switching tabs closes any open detail and resets the filter.
    pub fn switch_tab(&mut self, tab: CatalogTab) {
        if self.tab != tab {
            self.tab = tab;
            self.filter = FilterState::default();
            self.detail.clear();
        }
    }

    pub fn set_category(&mut self, category: &str) {
        self.filter.category = category.to_string();
    }

    pub fn set_query(&mut self, query: &str) {
        self.filter.query = query.to_string();
    }

    pub fn visible_projects(&self) -> Vec<Resolved<Project>> {
        filter(&self.projects, &self.filter.query, &self.filter.category)
    }

    pub fn visible_courses(&self) -> Vec<Resolved<Course>> {
        filter(&self.courses, &self.filter.query, &self.filter.category)
    }

    /// Distinct project categories in first-seen order, for the category buttons.
    pub fn project_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for project in &self.projects {
            if !categories.contains(&project.record.category) {
                categories.push(project.record.category.clone());
            }
        }
        categories
    }

    pub fn open(&mut self, id: &str) -> bool {
        let entity: Option<Entity> = match self.tab {
            CatalogTab::Projects => self.projects.iter().find(|p| p.id() == id).cloned().map(Into::into),
            CatalogTab::Courses => self.courses.iter().find(|c| c.id() == id).cloned().map(Into::into),
        };
        match entity {
            Some(entity) => {
                self.detail.select(entity);
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.detail.clear();
    }

    pub fn layout(&self) -> Layout {
        self.detail.layout()
    }

    pub fn selected(&self) -> Option<&Entity> {
        self.detail.selected()
    }
}

pub struct AlumniPage {
    carousel: Carousel<AlumniMember>,
}

impl Default for AlumniPage {
    fn default() -> Self {
        AlumniPage::new(ALUMNI.clone())
    }
}

impl AlumniPage {
    pub fn new(members: Vec<AlumniMember>) -> Self {
        AlumniPage {
            carousel: Carousel::starting_at(members, ALUMNI_START_INDEX),
        }
    }

    pub fn carousel(&self) -> &Carousel<AlumniMember> {
        &self.carousel
    }

    pub fn featured(&self) -> Option<&AlumniMember> {
        self.carousel.current()
    }
}

/// Alumni around `center` without any controller state, as served over HTTP.
pub fn alumni_window(members: &[AlumniMember], center: usize, radius: usize) -> Vec<(isize, AlumniMember)> {
    CarouselState::starting_at(members.len(), center)
        .window(radius)
        .into_iter()
        .filter_map(|slot| members.get(slot.index).map(|m| (slot.offset, m.clone())))
        .collect()
}

/// Filter for the resources page: category, difficulty and text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceFilter {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<CourseLevel>,
}

pub fn filter_resources(resources: &[Resource], wanted: &ResourceFilter) -> Vec<Resource> {
    resources
        .iter()
        .filter(|r| {
            wanted
                .category
                .as_deref()
                .is_none_or(|c| matches_category(r.category.as_str(), c))
                && wanted.difficulty.is_none_or(|d| r.difficulty == d)
                && matches_query(*r, &wanted.query)
        })
        .cloned()
        .collect()
}

/// The carousel is rebuilt at index 0 whenever the filtered set changes.
pub struct ResourcesPage {
    all: Vec<Resource>,
    filter: ResourceFilter,
    carousel: Carousel<Resource>,
}

impl Default for ResourcesPage {
    fn default() -> Self {
        ResourcesPage::new(RESOURCES.clone())
    }
}

impl ResourcesPage {
    pub fn new(all: Vec<Resource>) -> Self {
        let carousel = Carousel::new(all.clone());
        ResourcesPage {
            all,
            filter: ResourceFilter::default(),
            carousel,
        }
    }

    pub fn filter(&self) -> &ResourceFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: ResourceFilter) {
        let visible = filter_resources(&self.all, &filter);
        self.filter = filter;
        if visible != self.carousel.items() {
            self.carousel = Carousel::new(visible);
        }
    }

    pub fn featured(&self) -> Vec<&Resource> {
        self.carousel.items().iter().filter(|r| r.is_featured).collect()
    }

    pub fn carousel(&self) -> &Carousel<Resource> {
        &self.carousel
    }
}

pub struct TeamPage {
    members: Vec<TeamMember>,
    detail: DetailView,
}

impl Default for TeamPage {
    fn default() -> Self {
        TeamPage::new(TEAM.clone())
    }
}

impl TeamPage {
    pub fn new(members: Vec<TeamMember>) -> Self {
        TeamPage {
            members,
            detail: DetailView::new(),
        }
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn open(&mut self, id: &str) -> bool {
        match self.members.iter().find(|m| m.id == id) {
            Some(member) => {
                self.detail.select(member.clone());
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.detail.clear();
    }

    pub fn layout(&self) -> Layout {
        self.detail.layout()
    }
}

/// Product carousel plus the size chart and card-flip state of the shown product.
pub struct MerchBrowser {
    carousel: Carousel<MerchProduct>,
    selected_size: Option<String>,
    flipped: bool,
}

impl Default for MerchBrowser {
    fn default() -> Self {
        MerchBrowser::new(MERCH.clone())
    }
}

impl MerchBrowser {
    pub fn new(products: Vec<MerchProduct>) -> Self {
        MerchBrowser {
            carousel: Carousel::new(products),
            selected_size: None,
            flipped: false,
        }
    }

    pub fn current(&self) -> Option<&MerchProduct> {
        self.carousel.current()
    }

    pub fn selected_size(&self) -> Option<&str> {
        self.selected_size.as_deref()
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn next(&mut self) -> bool {
        let moved = self.carousel.next();
        if moved {
            self.reset_product_view();
        }
        moved
    }

    pub fn previous(&mut self) -> bool {
        let moved = self.carousel.previous();
        if moved {
            self.reset_product_view();
        }
        moved
    }

    pub fn jump_to(&mut self, index: usize) -> bool {
        let moved = self.carousel.jump_to(index);
        if moved {
            self.reset_product_view();
        }
        moved
    }

    /// Selecting the size already shown clears it. Sizes the product does not offer
    /// are ignored.
    pub fn toggle_size(&mut self, size: &str) -> Option<&str> {
        let offered = self
            .current()
            .is_some_and(|p| p.sizes.iter().any(|s| s == size));
        if !offered {
            return self.selected_size();
        }
        if self.selected_size.as_deref() == Some(size) {
            self.selected_size = None;
        } else {
            self.selected_size = Some(size.to_string());
        }
        self.selected_size()
    }

    pub fn flip(&mut self) -> bool {
        self.flipped = !self.flipped;
        self.flipped
    }

    pub fn measurements(&self) -> Option<Vec<(String, String)>> {
        let product = self.current()?;
        let size = self.selected_size.as_deref()?;
        product
            .measurements(size)
            .map(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }

    fn reset_product_view(&mut self) {
        self.selected_size = None;
        self.flipped = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::showcase::ResourceCategory;

    #[test]
    fn alumni_start_on_third_member() {
        let page = AlumniPage::default();
        assert_eq!(page.carousel().state().current_index, 2.min(ALUMNI.len() - 1));
    }

    #[test]
    fn alumni_window_is_centred() {
        let window = alumni_window(&ALUMNI, 0, 1);
        let offsets: Vec<_> = window.iter().map(|(o, _)| *o).collect();
        assert_eq!(offsets, vec![-1, 0, 1]);
        assert_eq!(window[1].1.id, ALUMNI[0].id);
        assert_eq!(window[0].1.id, ALUMNI[ALUMNI.len() - 1].id);
    }

    #[test]
    fn resource_filter_combines_all_criteria() {
        let wanted = ResourceFilter {
            query: String::new(),
            category: Some(ResourceCategory::Tutorial.as_str().to_lowercase()),
            difficulty: None,
        };
        let hits = filter_resources(&RESOURCES, &wanted);
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|r| r.category == ResourceCategory::Tutorial));
    }

    #[test]
    fn resources_carousel_rebuilds_when_results_change() {
        let mut page = ResourcesPage::default();
        page.carousel().next();

        page.set_filter(ResourceFilter {
            difficulty: Some(CourseLevel::Advanced),
            ..ResourceFilter::default()
        });
        let state = page.carousel().state();
        assert_eq!(state.current_index, 0);
        assert!(!state.transitioning);
        assert!(page.carousel().items().iter().all(|r| r.difficulty == CourseLevel::Advanced));
    }

    #[test]
    fn merch_size_toggles_and_resets_on_slide() {
        let mut merch = MerchBrowser::default();
        let size = merch.current().unwrap().sizes[0].clone();

        assert_eq!(merch.toggle_size(&size), Some(size.as_str()));
        assert!(merch.measurements().is_some());
        assert_eq!(merch.toggle_size(&size), None);

        merch.toggle_size(&size);
        merch.flip();
        assert!(merch.next());
        assert_eq!(merch.selected_size(), None);
        assert!(!merch.is_flipped());
    }

    #[test]
    fn unknown_size_is_ignored() {
        let mut merch = MerchBrowser::default();
        assert_eq!(merch.toggle_size("XXXL-not-offered"), None);
    }

    #[test]
    fn team_detail_opens_and_closes() {
        let mut page = TeamPage::default();
        let id = page.members()[0].id.clone();
        assert!(page.open(&id));
        assert_eq!(page.layout(), Layout::Detail);
        assert!(!page.open("missing"));
        page.close();
        assert_eq!(page.layout(), Layout::Grid);
    }
}
