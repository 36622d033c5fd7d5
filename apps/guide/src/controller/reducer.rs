//! Applies parsed user actions to the view-model.

use shared::navigation::{CategoryFilter, Tab, View};
use view_model::CatalogViewModel;

use crate::controller::events::{UiAction, UiError, HELP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One browse session: the view-model plus the athlete list's category pill
/// and a one-shot notice line for the next render.
pub struct Session {
    view_model: CatalogViewModel,
    category: CategoryFilter,
    notice: Option<String>,
}

impl Session {
    pub fn new(view_model: CatalogViewModel) -> Self {
        Self {
            view_model,
            category: CategoryFilter::All,
            notice: None,
        }
    }

    pub fn view_model(&self) -> &CatalogViewModel {
        &self.view_model
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub fn apply(&mut self, action: UiAction) -> Result<Flow, UiError> {
        match action {
            UiAction::Tab(tab) => {
                if tab == Tab::Athletes {
                    self.category = CategoryFilter::All;
                }
                self.view_model.select_tab(tab);
            }
            UiAction::OpenEvent(id) => {
                self.view_model.select_event(&id)?;
            }
            UiAction::OpenAthlete(id) => {
                self.view_model.select_athlete(&id)?;
            }
            UiAction::Back => {
                self.view_model.back();
            }
            UiAction::ToggleFavorite(id) => {
                let id = match id {
                    Some(id) => id,
                    None => self
                        .view_model
                        .selected_athlete()
                        .filter(|_| self.view_model.current_view() == View::AthleteDetail)
                        .map(|athlete| athlete.id.clone())
                        .ok_or_else(|| {
                            UiError::input("open an athlete first, or use: fav <id>")
                        })?,
                };
                let name = self.view_model.catalog().athlete(&id)?.name.clone();
                let saved = self.view_model.toggle_favorite(&id);
                self.notice = Some(if saved {
                    format!("Saved {name}")
                } else {
                    format!("Removed {name} from saved")
                });
            }
            UiAction::Search(text) => {
                self.view_model.set_search_query(text);
                self.show_athlete_list();
            }
            UiAction::Filter(category) => {
                if let CategoryFilter::Event(event_id) = &category {
                    self.view_model.catalog().event(event_id)?;
                }
                self.category = category;
                self.show_athlete_list();
            }
            UiAction::ViewAll => {
                let event_id = self
                    .view_model
                    .selected_event()
                    .filter(|_| self.view_model.current_view() == View::EventDetail)
                    .map(|event| event.id.clone())
                    .ok_or_else(|| UiError::input("open an event first"))?;
                self.category = CategoryFilter::Event(event_id);
                self.view_model.select_tab(Tab::Athletes);
            }
            UiAction::ShowElement(code) => self.view_model.show_element_info(code),
            UiAction::CloseElement => self.view_model.dismiss_element_info(),
            UiAction::Help => self.notice = Some(HELP.to_string()),
            UiAction::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Keeps the category pill, unlike the tab bar.
    fn show_athlete_list(&mut self) {
        if self.view_model.current_view() != View::Athletes {
            self.view_model.select_tab(Tab::Athletes);
        }
    }
}
