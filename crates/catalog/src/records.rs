//! On-disk catalog records and their resolution into typed domain values.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use shared::{
    domain::{
        Athlete, AthleteId, Competitors, Country, CountryCode, Discipline, Event, EventId,
        Performance, PlannedElements, Program, Programs, SeasonBest, Segment,
    },
    error::CatalogError,
};

const SEGMENT_DATE_FORMAT: &str = "%Y-%m-%d";
const SEGMENT_TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogRecords {
    pub countries: Vec<Country>,
    pub events: Vec<EventRecord>,
    #[serde(default)]
    pub elements: BTreeMap<String, String>,
    pub athletes: Vec<AthleteRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventRecord {
    pub id: EventId,
    pub name: String,
    pub icon: String,
    pub dates: String,
    pub description: String,
    pub color: String,
    #[serde(default)]
    pub segments: Vec<SegmentRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SegmentRecord {
    pub name: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub medal: bool,
}

/// Per-phase pair keyed the way the source tables key them (`sp`/`fs`).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhasePair<T> {
    pub sp: T,
    pub fs: T,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeasonBestRecord {
    pub sp: Option<f64>,
    pub fs: Option<f64>,
    pub rd: Option<f64>,
    pub fd: Option<f64>,
    pub total: f64,
    pub competition: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AthleteRecord {
    pub id: AthleteId,
    pub name: String,
    pub country: CountryCode,
    pub event: EventId,
    pub event_name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub top_contender: bool,
    #[serde(default)]
    pub world_ranking: Option<u32>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub season_best: Option<SeasonBestRecord>,
    #[serde(default)]
    pub planned_elements: Option<PhasePair<Vec<String>>>,
    #[serde(default)]
    pub programs: Option<PhasePair<Program>>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl EventRecord {
    pub(crate) fn resolve(self) -> Result<Event, CatalogError> {
        let segments = self
            .segments
            .into_iter()
            .map(|segment| segment.resolve(&self.id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Event {
            id: self.id,
            name: self.name,
            icon: self.icon,
            dates: self.dates,
            description: self.description,
            color: self.color,
            segments,
        })
    }
}

impl SegmentRecord {
    fn resolve(self, event: &EventId) -> Result<Segment, CatalogError> {
        let invalid = |value: &str| CatalogError::InvalidSchedule {
            event: event.clone(),
            segment: self.name.clone(),
            value: value.to_string(),
        };
        let date = NaiveDate::parse_from_str(self.date.trim(), SEGMENT_DATE_FORMAT)
            .map_err(|_| invalid(&self.date))?;
        let time = NaiveTime::parse_from_str(self.time.trim(), SEGMENT_TIME_FORMAT)
            .map_err(|_| invalid(&self.time))?;

        Ok(Segment {
            name: self.name,
            date,
            time,
            is_medal: self.medal,
        })
    }
}

impl AthleteRecord {
    /// Resolves the loose record into an [`Athlete`]. The event id must
    /// already be known to the caller; this only checks discipline shape.
    pub(crate) fn resolve(self) -> Result<Athlete, CatalogError> {
        let discipline = Discipline::from_event_id(&self.event).ok_or_else(|| {
            CatalogError::UndefinedDiscipline {
                athlete: self.id.clone(),
                event: self.event.clone(),
            }
        })?;

        let competitors = Competitors::parse(&self.name)
            .filter(|competitors| competitors.is_duo() == discipline.is_duo())
            .ok_or_else(|| CatalogError::CompetitorMismatch {
                athlete: self.id.clone(),
                discipline,
                name: self.name.clone(),
            })?;

        let season_best = self
            .season_best
            .map(|record| record.resolve(&self.id, discipline))
            .transpose()?;
        let planned_elements = self.planned_elements.map(|pair| PlannedElements {
            short_program: pair.sp,
            free_skating: pair.fs,
        });
        let programs = self.programs.map(|pair| Programs {
            first_phase: pair.sp,
            second_phase: pair.fs,
        });

        let performance = match discipline {
            Discipline::Singles => Performance::Singles {
                season_best,
                planned_elements,
                programs,
            },
            Discipline::Pairs => Performance::Pairs {
                season_best,
                planned_elements,
                programs,
            },
            Discipline::IceDance => {
                if planned_elements.is_some() {
                    return Err(CatalogError::PhaseMismatch {
                        athlete: self.id,
                        discipline,
                        detail: "planned elements".to_string(),
                    });
                }
                Performance::IceDance {
                    season_best,
                    programs,
                }
            }
        };

        Ok(Athlete {
            id: self.id,
            name: self.name,
            competitors,
            country: self.country,
            event: self.event,
            event_name: self.event_name,
            nickname: self.nickname,
            top_contender: self.top_contender,
            world_ranking: self.world_ranking,
            bio: self.bio,
            achievements: self.achievements,
            performance,
        })
    }
}

impl SeasonBestRecord {
    fn resolve(self, athlete: &AthleteId, discipline: Discipline) -> Result<SeasonBest, CatalogError> {
        let phases = match discipline {
            Discipline::Singles | Discipline::Pairs => match (self.sp, self.fs, self.rd, self.fd) {
                (Some(first), Some(second), None, None) => Some((first, second)),
                _ => None,
            },
            Discipline::IceDance => match (self.sp, self.fs, self.rd, self.fd) {
                (None, None, Some(first), Some(second)) => Some((first, second)),
                _ => None,
            },
        };
        let (first_phase, second_phase) = phases.ok_or_else(|| CatalogError::PhaseMismatch {
            athlete: athlete.clone(),
            discipline,
            detail: "season best phases".to_string(),
        })?;

        Ok(SeasonBest {
            first_phase,
            second_phase,
            total: self.total,
            competition: self.competition,
        })
    }
}
