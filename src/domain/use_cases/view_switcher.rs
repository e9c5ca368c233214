use serde::Serialize;

use crate::entities::entity::{Entity, EntityKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Grid,
    Detail,
}

/// Grid or a single expanded item. No history: `clear` always lands on the grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailView {
    selected: Option<Entity>,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever was selected before.
    pub fn select(&mut self, entity: impl Into<Entity>) {
        self.selected = Some(entity.into());
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Entity> {
        self.selected.as_ref()
    }

    pub fn selected_kind(&self) -> Option<EntityKind> {
        self.selected.as_ref().map(Entity::kind)
    }

    pub fn layout(&self) -> Layout {
        match self.selected {
            Some(_) => Layout::Detail,
            None => Layout::Grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::showcase::TeamMember;

    fn member(id: &str) -> TeamMember {
        TeamMember {
            id: id.into(),
            name: "Aarav Mehta".into(),
            role: "President".into(),
            description: "Leads the club".into(),
            image: "/images/team/aarav.jpg".into(),
            github: None,
            linkedin: None,
            email: None,
            year: "4th Year".into(),
            department: "CSE".into(),
        }
    }

    #[test]
    fn select_switches_to_detail_and_clear_back() {
        let mut view = DetailView::new();
        assert_eq!(view.layout(), Layout::Grid);

        view.select(member("t1"));
        assert_eq!(view.layout(), Layout::Detail);
        assert_eq!(view.selected_kind(), Some(EntityKind::TeamMember));

        view.select(member("t2"));
        assert_eq!(view.selected().map(Entity::id), Some("t2"));

        view.clear();
        view.clear();
        assert_eq!(view.layout(), Layout::Grid);
    }
}
