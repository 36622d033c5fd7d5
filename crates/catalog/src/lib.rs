use anyhow::{Context, Result};
use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap, HashSet},
    fs,
    hash::Hash,
    path::Path,
};
use tracing::{info, warn};

use shared::{
    domain::{Athlete, AthleteId, Country, CountryCode, Event, EventId},
    error::CatalogError,
};

pub mod media;
pub mod records;

pub use records::CatalogRecords;

/// Catalog shipped with the binary.
pub const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

/// How to treat athletes whose country code is missing from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferencePolicy {
    /// Keep the athlete and let presentation fall back to a placeholder.
    #[default]
    Lenient,
    /// Refuse to load.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub events: usize,
    pub athletes: usize,
    pub nations: usize,
}

/// Immutable reference data for one session. Insertion order of every table
/// is preserved.
#[derive(Debug, Clone)]
pub struct Catalog {
    countries: Vec<Country>,
    country_index: HashMap<CountryCode, usize>,
    events: Vec<Event>,
    event_index: HashMap<EventId, usize>,
    athletes: Vec<Athlete>,
    athlete_index: HashMap<AthleteId, usize>,
    elements: BTreeMap<String, String>,
}

impl Catalog {
    pub fn embedded(policy: ReferencePolicy) -> Result<Self> {
        Self::from_json_str(EMBEDDED_CATALOG, policy).context("embedded catalog is invalid")
    }

    /// Loads `path` when given, the embedded catalog otherwise.
    pub fn load(path: Option<&Path>, policy: ReferencePolicy) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path, policy),
            None => Self::embedded(policy),
        }
    }

    pub fn from_path(path: &Path, policy: ReferencePolicy) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file '{}'", path.display()))?;
        Self::from_json_str(&raw, policy)
            .with_context(|| format!("failed to load catalog file '{}'", path.display()))
    }

    pub fn from_json_str(raw: &str, policy: ReferencePolicy) -> Result<Self> {
        let records: CatalogRecords =
            serde_json::from_str(raw).context("failed to parse catalog json")?;
        Ok(Self::from_records(records, policy)?)
    }

    pub fn from_records(
        records: CatalogRecords,
        policy: ReferencePolicy,
    ) -> Result<Self, CatalogError> {
        let country_index = index_unique("country", &records.countries, |c| &c.code)?;

        let events = records
            .events
            .into_iter()
            .map(|record| record.resolve())
            .collect::<Result<Vec<_>, _>>()?;
        let event_index = index_unique("event", &events, |e| &e.id)?;

        let mut athletes = Vec::with_capacity(records.athletes.len());
        for record in records.athletes {
            if !event_index.contains_key(&record.event) {
                return Err(CatalogError::UnknownEvent(record.event));
            }
            if !country_index.contains_key(&record.country) {
                match policy {
                    ReferencePolicy::Strict => {
                        return Err(CatalogError::UnknownCountry(record.country));
                    }
                    ReferencePolicy::Lenient => warn!(
                        athlete = %record.id,
                        country = %record.country,
                        "athlete references unknown country; showing placeholder"
                    ),
                }
            }
            athletes.push(record.resolve()?);
        }
        let athlete_index = index_unique("athlete", &athletes, |a| &a.id)?;

        let catalog = Self {
            countries: records.countries,
            country_index,
            events,
            event_index,
            athletes,
            athlete_index,
            elements: records.elements,
        };

        info!(
            countries = catalog.countries.len(),
            events = catalog.events.len(),
            athletes = catalog.athletes.len(),
            elements = catalog.elements.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn athletes(&self) -> &[Athlete] {
        &self.athletes
    }

    pub fn elements(&self) -> &BTreeMap<String, String> {
        &self.elements
    }

    pub fn country(&self, code: &CountryCode) -> Result<&Country, CatalogError> {
        self.country_index
            .get(code)
            .map(|&idx| &self.countries[idx])
            .ok_or_else(|| CatalogError::UnknownCountry(code.clone()))
    }

    /// Like [`Catalog::country`] but degrades to [`Country::placeholder`].
    pub fn country_or_placeholder(&self, code: &CountryCode) -> Cow<'_, Country> {
        match self.country(code) {
            Ok(country) => Cow::Borrowed(country),
            Err(_) => Cow::Owned(Country::placeholder(code.clone())),
        }
    }

    pub fn country_name(&self, code: &CountryCode) -> Option<&str> {
        self.country(code).ok().map(|country| country.name.as_str())
    }

    pub fn event(&self, id: &EventId) -> Result<&Event, CatalogError> {
        self.event_index
            .get(id)
            .map(|&idx| &self.events[idx])
            .ok_or_else(|| CatalogError::UnknownEvent(id.clone()))
    }

    pub fn athlete(&self, id: &AthleteId) -> Result<&Athlete, CatalogError> {
        self.athlete_index
            .get(id)
            .map(|&idx| &self.athletes[idx])
            .ok_or_else(|| CatalogError::UnknownAthlete(id.clone()))
    }

    pub fn contains_athlete(&self, id: &AthleteId) -> bool {
        self.athlete_index.contains_key(id)
    }

    /// Entries of one event in catalog order.
    pub fn event_roster(&self, id: &EventId) -> Vec<&Athlete> {
        self.athletes
            .iter()
            .filter(|athlete| &athlete.event == id)
            .collect()
    }

    /// Top contenders in catalog order, at most `limit`.
    pub fn featured(&self, limit: usize) -> Vec<&Athlete> {
        self.athletes
            .iter()
            .filter(|athlete| athlete.top_contender)
            .take(limit)
            .collect()
    }

    /// Glossary text for an element code, or a generic line for codes the
    /// glossary does not cover (combinations, sequences).
    pub fn explain_element<'a>(&'a self, code: &str) -> Cow<'a, str> {
        match self.elements.get(code) {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => Cow::Owned(format!("{code} - Technical skating element")),
        }
    }

    pub fn stats(&self) -> CatalogStats {
        let nations: HashSet<&CountryCode> =
            self.athletes.iter().map(|athlete| &athlete.country).collect();
        CatalogStats {
            events: self.events.len(),
            athletes: self.athletes.len(),
            nations: nations.len(),
        }
    }
}

fn index_unique<T, K, F>(
    kind: &'static str,
    items: &[T],
    key: F,
) -> Result<HashMap<K, usize>, CatalogError>
where
    K: Clone + Eq + Hash + std::fmt::Display,
    F: Fn(&T) -> &K,
{
    let mut index = HashMap::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let key = key(item);
        if index.insert(key.clone(), idx).is_some() {
            return Err(CatalogError::DuplicateKey {
                kind,
                key: key.to_string(),
            });
        }
    }
    Ok(index)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
