//! Text front end: every screen is a pure function of view-model state.

pub mod screens;
pub mod widgets;

use catalog::media::MediaOptions;
use shared::navigation::View;

use crate::{config::Settings, controller::reducer::Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenOptions {
    pub featured_limit: usize,
    pub roster_preview_limit: usize,
    pub free_program_preview: usize,
    pub media: MediaOptions,
}

impl From<&Settings> for ScreenOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            featured_limit: settings.featured_limit,
            roster_preview_limit: settings.roster_preview_limit,
            free_program_preview: settings.free_program_preview,
            media: settings.media_options(),
        }
    }
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

pub fn render(session: &Session, options: &ScreenOptions) -> String {
    let vm = session.view_model();
    let body = match vm.current_view() {
        View::Home => screens::home(vm, options),
        View::Events => screens::events(vm),
        View::EventDetail => screens::event_detail(vm, options),
        View::Athletes => screens::athletes(vm, session.category()),
        View::AthleteDetail => screens::athlete_detail(vm, options),
        View::Favorites => screens::favorites(vm),
    };

    let mut out = body;
    if let Some(card) = screens::element_card(vm) {
        out.push('\n');
        out.push_str(&card);
    }
    out.push('\n');
    out.push_str(&widgets::tab_bar(vm.current_view()));
    out
}

#[cfg(test)]
#[path = "../tests/screens_tests.rs"]
mod tests;
