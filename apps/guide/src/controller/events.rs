//! User actions parsed from browse-session input, and error modeling for them.

use shared::{
    domain::{AthleteId, EventId},
    error::{CatalogError, ErrorCode},
    navigation::{CategoryFilter, Tab},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Tab(Tab),
    OpenEvent(EventId),
    OpenAthlete(AthleteId),
    Back,
    /// Without an id, toggles the athlete on screen.
    ToggleFavorite(Option<AthleteId>),
    Search(String),
    Filter(CategoryFilter),
    /// "View all" from an event roster.
    ViewAll,
    ShowElement(String),
    CloseElement,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Input,
    NotFound,
    Validation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    message: String,
}

impl UiError {
    pub fn input(message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Input,
            message: message.into(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<CatalogError> for UiError {
    fn from(value: CatalogError) -> Self {
        let category = match value.code() {
            ErrorCode::NotFound => UiErrorCategory::NotFound,
            ErrorCode::Validation => UiErrorCategory::Validation,
        };
        Self {
            category,
            message: value.to_string(),
        }
    }
}

pub const HELP: &str = "\
commands:
  home | schedule | athletes | saved   switch tab
  event <id>                           open an event
  athlete <id>                         open an athlete
  all                                  list every entry of the open event
  back                                 go to the parent screen
  fav [<id>]                           toggle a favorite
  search [<text>]                      set (or clear) the athlete search
  filter <all|event-id>                athlete list category
  element <code>                       explain an element code
  close                                close the element card
  help | quit";

/// Parses one input line. Blank lines yield `None`.
pub fn parse_action(line: &str) -> Result<Option<UiAction>, UiError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match trimmed.split_once(' ') {
        Some((verb, rest)) => (verb, rest),
        None => (trimmed, ""),
    };
    let argument = rest.trim();

    let action = match verb.to_ascii_lowercase().as_str() {
        "home" | "schedule" | "events" | "athletes" | "saved" | "favorites" => {
            let tab = verb.parse::<Tab>().map_err(UiError::input)?;
            UiAction::Tab(tab)
        }
        "event" => UiAction::OpenEvent(EventId::new(required(argument, "event <id>")?)),
        "athlete" => UiAction::OpenAthlete(AthleteId::new(required(argument, "athlete <id>")?)),
        "back" => UiAction::Back,
        "fav" | "favorite" => {
            UiAction::ToggleFavorite((!argument.is_empty()).then(|| AthleteId::new(argument)))
        }
        // The query is kept exactly as typed after the first space.
        "search" => UiAction::Search(rest.to_string()),
        "filter" => {
            let category = required(argument, "filter <all|event-id>")?
                .parse::<CategoryFilter>()
                .map_err(UiError::input)?;
            UiAction::Filter(category)
        }
        "all" => UiAction::ViewAll,
        "element" => UiAction::ShowElement(required(argument, "element <code>")?.to_string()),
        "close" => UiAction::CloseElement,
        "help" | "?" => UiAction::Help,
        "quit" | "exit" | "q" => UiAction::Quit,
        other => return Err(UiError::input(format!("unknown command '{other}'; try 'help'"))),
    };

    Ok(Some(action))
}

fn required<'a>(argument: &'a str, usage: &str) -> Result<&'a str, UiError> {
    if argument.is_empty() {
        Err(UiError::input(format!("usage: {usage}")))
    } else {
        Ok(argument)
    }
}
