//! Pure list derivations behind the athlete and favorites screens. Results
//! are recomputed on every call and keep the input order.

use std::collections::HashSet;

use catalog::Catalog;
use shared::{
    domain::{Athlete, AthleteId},
    navigation::CategoryFilter,
};

/// Case-insensitive substring match on the entry name, the country code or
/// the resolved country name. An empty query matches everything.
pub fn matches_query(catalog: &Catalog, athlete: &Athlete, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    athlete.name.to_lowercase().contains(&needle)
        || athlete.country.as_str().to_lowercase().contains(&needle)
        || catalog
            .country_name(&athlete.country)
            .is_some_and(|name| name.to_lowercase().contains(&needle))
}

pub fn filter_athletes<'a>(
    catalog: &Catalog,
    athletes: &'a [Athlete],
    query: &str,
    category: &CategoryFilter,
) -> Vec<&'a Athlete> {
    athletes
        .iter()
        .filter(|athlete| matches_query(catalog, athlete, query))
        .filter(|athlete| category.matches(athlete))
        .collect()
}

/// Favorited entries in list order, not in the order they were favorited.
/// Ids that are not in `athletes` are ignored.
pub fn favorite_subset<'a>(
    athletes: &'a [Athlete],
    favorites: &HashSet<AthleteId>,
) -> Vec<&'a Athlete> {
    athletes
        .iter()
        .filter(|athlete| favorites.contains(&athlete.id))
        .collect()
}
