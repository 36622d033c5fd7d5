use std::{collections::HashSet, sync::Arc};

use catalog::Catalog;
use shared::{
    domain::{Athlete, AthleteId, Event, EventId},
    error::CatalogError,
    navigation::{CategoryFilter, Tab, View},
};
use tracing::debug;

pub mod filter;

pub use filter::{favorite_subset, filter_athletes, matches_query};

/// Where the user is. Selections are stored as ids that were checked against
/// the catalog when they were set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub current_view: View,
    pub selected_event: Option<EventId>,
    pub selected_athlete: Option<AthleteId>,
    pub search_query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementInfo {
    pub code: String,
    pub explanation: String,
}

/// Session state container for the guide: navigation, favorites, search
/// text and the open element card. All mutation goes through the methods
/// below; derived lists are computed on demand and never cached.
#[derive(Debug, Clone)]
pub struct CatalogViewModel {
    catalog: Arc<Catalog>,
    navigation: NavigationState,
    favorites: HashSet<AthleteId>,
    element_info: Option<String>,
}

impl CatalogViewModel {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            navigation: NavigationState::default(),
            favorites: HashSet::new(),
            element_info: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn current_view(&self) -> View {
        self.navigation.current_view
    }

    pub fn selected_event(&self) -> Option<&Event> {
        let id = self.navigation.selected_event.as_ref()?;
        self.catalog.event(id).ok()
    }

    pub fn selected_athlete(&self) -> Option<&Athlete> {
        let id = self.navigation.selected_athlete.as_ref()?;
        self.catalog.athlete(id).ok()
    }

    pub fn search_query(&self) -> &str {
        &self.navigation.search_query
    }

    pub fn favorite_ids(&self) -> &HashSet<AthleteId> {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &AthleteId) -> bool {
        self.favorites.contains(id)
    }

    /// Moves to `view`, replacing only the selections that are given. Both
    /// ids are checked before anything changes.
    pub fn navigate_to(
        &mut self,
        view: View,
        event: Option<&EventId>,
        athlete: Option<&AthleteId>,
    ) -> Result<(), CatalogError> {
        if let Some(id) = event {
            self.catalog.event(id)?;
        }
        if let Some(id) = athlete {
            self.catalog.athlete(id)?;
        }

        if let Some(id) = event {
            self.navigation.selected_event = Some(id.clone());
        }
        if let Some(id) = athlete {
            self.navigation.selected_athlete = Some(id.clone());
        }
        self.set_view(view);
        Ok(())
    }

    /// Tab bar navigation. Always drops both selections.
    pub fn select_tab(&mut self, tab: Tab) {
        self.clear_selections();
        self.set_view(tab.view());
    }

    pub fn select_event(&mut self, id: &EventId) -> Result<&Event, CatalogError> {
        let event = self.catalog.event(id)?;
        self.navigation.selected_event = Some(event.id.clone());
        self.navigation.current_view = View::EventDetail;
        self.element_info = None;
        debug!(event = %event.id, "event selected");
        Ok(event)
    }

    pub fn select_athlete(&mut self, id: &AthleteId) -> Result<&Athlete, CatalogError> {
        let athlete = self.catalog.athlete(id)?;
        self.navigation.selected_athlete = Some(athlete.id.clone());
        self.navigation.current_view = View::AthleteDetail;
        self.element_info = None;
        debug!(athlete = %athlete.id, "athlete selected");
        Ok(athlete)
    }

    /// Leaves `from` for its fixed parent (`athlete-detail` -> `athletes`,
    /// `event-detail` -> `events`, anything else -> `home`). Every parent is
    /// a list screen, so no selection survives.
    pub fn go_back(&mut self, from: View) -> View {
        let target = from.parent();
        self.clear_selections();
        self.set_view(target);
        target
    }

    /// [`CatalogViewModel::go_back`] from the screen currently shown.
    pub fn back(&mut self) -> View {
        self.go_back(self.navigation.current_view)
    }

    /// Flips membership of `id` and returns whether it is now a favorite.
    pub fn toggle_favorite(&mut self, id: &AthleteId) -> bool {
        let now_favorite = if self.favorites.remove(id) {
            false
        } else {
            if !self.catalog.contains_athlete(id) {
                debug!(athlete = %id, "favoriting id missing from catalog");
            }
            self.favorites.insert(id.clone());
            true
        };
        debug!(athlete = %id, favorite = now_favorite, "favorite toggled");
        now_favorite
    }

    /// Stored verbatim; no trimming.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.navigation.search_query = text.into();
    }

    pub fn visible_athletes(&self, category: &CategoryFilter) -> Vec<&Athlete> {
        self.visible_among(self.catalog.athletes(), category)
    }

    pub fn visible_among<'a>(
        &self,
        athletes: &'a [Athlete],
        category: &CategoryFilter,
    ) -> Vec<&'a Athlete> {
        filter_athletes(
            &self.catalog,
            athletes,
            &self.navigation.search_query,
            category,
        )
    }

    pub fn favorite_athletes(&self) -> Vec<&Athlete> {
        self.favorites_among(self.catalog.athletes())
    }

    pub fn favorites_among<'a>(&self, athletes: &'a [Athlete]) -> Vec<&'a Athlete> {
        favorite_subset(athletes, &self.favorites)
    }

    pub fn featured_athletes(&self, limit: usize) -> Vec<&Athlete> {
        self.catalog.featured(limit)
    }

    pub fn event_roster(&self, id: &EventId) -> Vec<&Athlete> {
        self.catalog.event_roster(id)
    }

    pub fn show_element_info(&mut self, code: impl Into<String>) {
        self.element_info = Some(code.into());
    }

    pub fn dismiss_element_info(&mut self) {
        self.element_info = None;
    }

    pub fn element_info(&self) -> Option<ElementInfo> {
        let code = self.element_info.as_ref()?;
        Some(ElementInfo {
            code: code.clone(),
            explanation: self.catalog.explain_element(code).into_owned(),
        })
    }

    fn set_view(&mut self, view: View) {
        let from = self.navigation.current_view;
        self.navigation.current_view = view;
        self.element_info = None;
        debug!(%from, to = %view, "view changed");
    }

    fn clear_selections(&mut self) {
        self.navigation.selected_event = None;
        self.navigation.selected_athlete = None;
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
