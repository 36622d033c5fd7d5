use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

macro_rules! key_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

key_newtype!(AthleteId);
key_newtype!(EventId);
key_newtype!(CountryCode);

pub const PLACEHOLDER_FLAG: &str = "🏳️";
pub const PLACEHOLDER_COLOR: &str = "666666";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: CountryCode,
    pub name: String,
    pub flag: String,
    /// Hex color without `#`, used as generated avatar background.
    pub avatar_color: String,
    /// CSS-style accent color, e.g. `#3C3B6E`.
    pub accent_color: String,
}

impl Country {
    /// Display stand-in for a code missing from the catalog.
    pub fn placeholder(code: CountryCode) -> Self {
        Self {
            code,
            name: "Unknown".to_string(),
            flag: PLACEHOLDER_FLAG.to_string(),
            avatar_color: PLACEHOLDER_COLOR.to_string(),
            accent_color: format!("#{PLACEHOLDER_COLOR}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub is_medal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub icon: String,
    pub dates: String,
    pub description: String,
    pub color: String,
    pub segments: Vec<Segment>,
}

impl Event {
    pub fn medal_segment(&self) -> Option<&Segment> {
        self.segments.iter().find(|segment| segment.is_medal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    Singles,
    Pairs,
    IceDance,
}

impl Discipline {
    /// Maps a competition event id onto the discipline its entries skate.
    /// The team event has no entries of its own.
    pub fn from_event_id(event_id: &EventId) -> Option<Self> {
        match event_id.as_str() {
            "mens" | "womens" => Some(Self::Singles),
            "pairs" => Some(Self::Pairs),
            "ice-dance" => Some(Self::IceDance),
            _ => None,
        }
    }

    pub fn phase_labels(self) -> (&'static str, &'static str) {
        match self {
            Self::Singles | Self::Pairs => ("Short Program", "Free Skating"),
            Self::IceDance => ("Rhythm Dance", "Free Dance"),
        }
    }

    pub fn is_duo(self) -> bool {
        !matches!(self, Self::Singles)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub full_name: String,
}

impl Person {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
        }
    }

    pub fn surname(&self) -> &str {
        self.full_name
            .split_whitespace()
            .last()
            .unwrap_or(self.full_name.as_str())
    }
}

pub const DUO_SEPARATOR: &str = " & ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "people", rename_all = "snake_case")]
pub enum Competitors {
    Solo(Person),
    Duo(Person, Person),
}

impl Competitors {
    /// Splits an entry name like `"Madison Chock & Evan Bates"` once.
    /// Returns `None` for more than two names or an empty half.
    pub fn parse(name: &str) -> Option<Self> {
        let parts: Vec<&str> = name.split(DUO_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [solo] if !solo.is_empty() => Some(Self::Solo(Person::new(*solo))),
            [first, second] if !first.is_empty() && !second.is_empty() => {
                Some(Self::Duo(Person::new(*first), Person::new(*second)))
            }
            _ => None,
        }
    }

    pub fn people(&self) -> Vec<&Person> {
        match self {
            Self::Solo(person) => vec![person],
            Self::Duo(first, second) => vec![first, second],
        }
    }

    pub fn is_duo(&self) -> bool {
        matches!(self, Self::Duo(..))
    }

    /// Compact label for tiles: the (first) surname.
    pub fn short_label(&self) -> &str {
        match self {
            Self::Solo(person) | Self::Duo(person, _) => person.surname(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonBest {
    pub first_phase: f64,
    pub second_phase: f64,
    pub total: f64,
    pub competition: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedElements {
    pub short_program: Vec<String>,
    pub free_skating: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub title: String,
    pub music: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Programs {
    pub first_phase: Program,
    pub second_phase: Program,
}

/// Scoring and program data, shaped by discipline. Ice dance never carries
/// planned jump elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "discipline", rename_all = "snake_case")]
pub enum Performance {
    Singles {
        season_best: Option<SeasonBest>,
        planned_elements: Option<PlannedElements>,
        programs: Option<Programs>,
    },
    Pairs {
        season_best: Option<SeasonBest>,
        planned_elements: Option<PlannedElements>,
        programs: Option<Programs>,
    },
    IceDance {
        season_best: Option<SeasonBest>,
        programs: Option<Programs>,
    },
}

impl Performance {
    pub fn discipline(&self) -> Discipline {
        match self {
            Self::Singles { .. } => Discipline::Singles,
            Self::Pairs { .. } => Discipline::Pairs,
            Self::IceDance { .. } => Discipline::IceDance,
        }
    }

    pub fn season_best(&self) -> Option<&SeasonBest> {
        match self {
            Self::Singles { season_best, .. }
            | Self::Pairs { season_best, .. }
            | Self::IceDance { season_best, .. } => season_best.as_ref(),
        }
    }

    pub fn planned_elements(&self) -> Option<&PlannedElements> {
        match self {
            Self::Singles {
                planned_elements, ..
            }
            | Self::Pairs {
                planned_elements, ..
            } => planned_elements.as_ref(),
            Self::IceDance { .. } => None,
        }
    }

    pub fn programs(&self) -> Option<&Programs> {
        match self {
            Self::Singles { programs, .. }
            | Self::Pairs { programs, .. }
            | Self::IceDance { programs, .. } => programs.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    pub id: AthleteId,
    pub name: String,
    pub competitors: Competitors,
    pub country: CountryCode,
    pub event: EventId,
    pub event_name: String,
    pub nickname: Option<String>,
    pub top_contender: bool,
    pub world_ranking: Option<u32>,
    pub bio: Option<String>,
    pub achievements: Vec<String>,
    pub performance: Performance,
}

impl Athlete {
    pub fn discipline(&self) -> Discipline {
        self.performance.discipline()
    }
}
