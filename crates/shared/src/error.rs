use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{AthleteId, CountryCode, Discipline, EventId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Validation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown country code '{0}'")]
    UnknownCountry(CountryCode),
    #[error("unknown event '{0}'")]
    UnknownEvent(EventId),
    #[error("unknown athlete '{0}'")]
    UnknownAthlete(AthleteId),
    #[error("duplicate {kind} key '{key}'")]
    DuplicateKey { kind: &'static str, key: String },
    #[error("athlete '{athlete}' is entered in event '{event}' which has no discipline")]
    UndefinedDiscipline { athlete: AthleteId, event: EventId },
    #[error("athlete '{athlete}' name does not fit {discipline:?} ({name:?})")]
    CompetitorMismatch {
        athlete: AthleteId,
        discipline: Discipline,
        name: String,
    },
    #[error("athlete '{athlete}' has {detail} which {discipline:?} does not use")]
    PhaseMismatch {
        athlete: AthleteId,
        discipline: Discipline,
        detail: String,
    },
    #[error("event '{event}' segment '{segment}' has unreadable schedule '{value}'")]
    InvalidSchedule {
        event: EventId,
        segment: String,
        value: String,
    },
}

impl CatalogError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownCountry(_) | Self::UnknownEvent(_) | Self::UnknownAthlete(_) => {
                ErrorCode::NotFound
            }
            Self::DuplicateKey { .. }
            | Self::UndefinedDiscipline { .. }
            | Self::CompetitorMismatch { .. }
            | Self::PhaseMismatch { .. }
            | Self::InvalidSchedule { .. } => ErrorCode::Validation,
        }
    }
}
