use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::{Athlete, EventId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Home,
    Events,
    EventDetail,
    Athletes,
    AthleteDetail,
    Favorites,
}

impl View {
    /// Logical parent used by the back action.
    pub fn parent(self) -> View {
        match self {
            View::AthleteDetail => View::Athletes,
            View::EventDetail => View::Events,
            _ => View::Home,
        }
    }

    pub fn is_detail(self) -> bool {
        matches!(self, View::EventDetail | View::AthleteDetail)
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Events => "Schedule",
            View::EventDetail => "Event",
            View::Athletes => "Athletes",
            View::AthleteDetail => "Athlete",
            View::Favorites => "Saved",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Primary tab bar destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Home,
    Schedule,
    Athletes,
    Saved,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Schedule, Tab::Athletes, Tab::Saved];

    pub fn view(self) -> View {
        match self {
            Tab::Home => View::Home,
            Tab::Schedule => View::Events,
            Tab::Athletes => View::Athletes,
            Tab::Saved => View::Favorites,
        }
    }

    pub fn label(self) -> &'static str {
        self.view().label()
    }

    /// The tab highlighted while `view` is on screen.
    pub fn for_view(view: View) -> Tab {
        match view {
            View::Home => Tab::Home,
            View::Events | View::EventDetail => Tab::Schedule,
            View::Athletes | View::AthleteDetail => Tab::Athletes,
            View::Favorites => Tab::Saved,
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Tab::Home),
            "schedule" | "events" => Ok(Tab::Schedule),
            "athletes" => Ok(Tab::Athletes),
            "saved" | "favorites" => Ok(Tab::Saved),
            other => Err(format!("unknown tab '{other}'")),
        }
    }
}

/// Athlete list filter pill: everything, or one event id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Event(EventId),
}

impl CategoryFilter {
    pub fn matches(&self, athlete: &Athlete) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Event(event_id) => &athlete.event == event_id,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            return Err("category must not be empty".to_string());
        }
        if value.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Ok(CategoryFilter::Event(EventId::new(value)))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Event(event_id) => write!(f, "{event_id}"),
        }
    }
}
