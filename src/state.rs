//! View state for one page view. Plain data, mutated only by the page's own
//! event handlers; the components read it through a single signal.

use std::collections::BTreeSet;

use crate::config::BACK_TO_TOP_THRESHOLD;
use crate::content::{Project, ProjectCategory, SectionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ProjectFilter {
    #[default]
    All,
    Web,
    Other,
}

impl ProjectFilter {
    /// Button order in the filter bar.
    pub const ALL: [ProjectFilter; 3] = [Self::All, Self::Web, Self::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Web => "Web",
            Self::Other => "Other",
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Web => project.category == ProjectCategory::Web,
            Self::Other => project.category == ProjectCategory::Other,
        }
    }
}

/// Projects shown under `filter`, in declaration order.
pub fn visible_projects(filter: ProjectFilter, projects: &[Project]) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| filter.matches(p))
        .copied()
        .collect()
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// Sections that have been revealed. Entries are only ever added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealSet(BTreeSet<SectionId>);

impl RevealSet {
    /// Returns true only for the first reveal of `section`.
    pub fn reveal(&mut self, section: SectionId) -> bool {
        self.0.insert(section)
    }

    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.0.contains(&section)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    menu_open: bool,
    active_filter: ProjectFilter,
    back_to_top_visible: bool,
    revealed: RevealSet,
}

impl PageState {
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn active_filter(&self) -> ProjectFilter {
        self.active_filter
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.back_to_top_visible
    }

    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.revealed.is_revealed(section)
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        log::debug!("menu open: {}", self.menu_open);
    }

    /// Navigating to a section always leaves the mobile menu closed,
    /// whether or not the target exists.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn set_filter(&mut self, filter: ProjectFilter) {
        self.active_filter = filter;
        log::debug!("project filter: {}", filter.label());
    }

    pub fn visible_projects(&self, projects: &[Project]) -> Vec<Project> {
        visible_projects(self.active_filter, projects)
    }

    /// Latest scroll offset wins. Returns whether the button visibility changed.
    pub fn record_scroll(&mut self, scroll_y: f64) -> bool {
        let visible = back_to_top_visible(scroll_y);
        let changed = visible != self.back_to_top_visible;
        self.back_to_top_visible = visible;
        changed
    }

    pub fn reveal(&mut self, section: SectionId) -> bool {
        let first = self.revealed.reveal(section);
        if first {
            log::debug!("revealed section {}", section.id());
        }
        first
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{PAGE_SECTIONS, PROJECTS};

    fn project(category: ProjectCategory) -> Project {
        Project {
            title: "p",
            technologies: "",
            category,
            description: &[],
            lead_paragraph: false,
        }
    }

    #[test]
    fn test_menu_state_machine() {
        let mut state = PageState::default();
        assert!(!state.menu_open());

        state.toggle_menu();
        assert!(state.menu_open());
        state.toggle_menu();
        assert!(!state.menu_open());

        // navigation closes from either state
        state.close_menu();
        assert!(!state.menu_open());
        state.toggle_menu();
        state.close_menu();
        assert!(!state.menu_open());
    }

    #[test]
    fn test_back_to_top_boundary() {
        assert!(!back_to_top_visible(0.0));
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(300.5));
        assert!(back_to_top_visible(301.0));
    }

    #[test]
    fn test_record_scroll_latest_wins() {
        let mut state = PageState::default();
        assert!(state.record_scroll(301.0));
        assert!(state.back_to_top_visible());
        assert!(!state.record_scroll(5000.0));
        assert!(state.back_to_top_visible());
        assert!(state.record_scroll(300.0));
        assert!(!state.back_to_top_visible());
        assert!(!state.record_scroll(0.0));
        assert!(!state.back_to_top_visible());
    }

    #[test]
    fn test_filter_visibility() {
        let projects = [project(ProjectCategory::Web), project(ProjectCategory::Other)];

        let web = visible_projects(ProjectFilter::Web, &projects);
        assert_eq!(web.len(), 1);
        assert_eq!(web[0].category, ProjectCategory::Web);

        let other = visible_projects(ProjectFilter::Other, &projects);
        assert_eq!(other.len(), 1);
        assert_eq!(other[0].category, ProjectCategory::Other);

        let all = visible_projects(ProjectFilter::All, &projects);
        assert_eq!(all, projects.to_vec());
    }

    #[test]
    fn test_filter_matches_definition_for_site_projects() {
        let mut state = PageState::default();
        for filter in ProjectFilter::ALL {
            state.set_filter(filter);
            let expected = PROJECTS
                .iter()
                .filter(|p| filter == ProjectFilter::All || filter.matches(p))
                .copied()
                .collect::<Vec<_>>();
            assert_eq!(state.visible_projects(PROJECTS), expected);
            assert_eq!(state.active_filter(), filter);
        }
        state.set_filter(ProjectFilter::All);
        let titles = state
            .visible_projects(PROJECTS)
            .iter()
            .map(|p| p.title)
            .collect::<Vec<_>>();
        let declared = PROJECTS.iter().map(|p| p.title).collect::<Vec<_>>();
        assert_eq!(titles, declared);
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let mut state = PageState::default();
        for section in PAGE_SECTIONS {
            assert!(!state.is_revealed(*section));
        }

        // intersection events arriving in arbitrary order, with repeats
        let events = [
            SectionId::Skills,
            SectionId::About,
            SectionId::Skills,
            SectionId::Contact,
            SectionId::About,
            SectionId::Skills,
        ];
        let mut first_reveals = Vec::new();
        for section in events {
            if state.reveal(section) {
                first_reveals.push(section);
            }
            assert!(state.is_revealed(section));
        }
        assert_eq!(
            first_reveals,
            vec![SectionId::Skills, SectionId::About, SectionId::Contact]
        );

        // unrelated state changes never hide a section again
        state.record_scroll(0.0);
        state.toggle_menu();
        state.set_filter(ProjectFilter::Other);
        assert!(state.is_revealed(SectionId::Skills));
        assert!(state.is_revealed(SectionId::About));
        assert!(state.is_revealed(SectionId::Contact));
        assert!(!state.is_revealed(SectionId::Education));
    }

    #[test]
    fn test_reveal_set_counts() {
        let mut set = RevealSet::default();
        assert!(set.is_empty());
        assert!(set.reveal(SectionId::Projects));
        assert!(!set.reveal(SectionId::Projects));
        assert_eq!(set.len(), 1);
    }
}
