//! Static city → nearby-city lookup table
//!
//! An immutable, explicitly constructed table owned by the alternative
//! finder. Unknown cities fall back to a single self-candidate, which can
//! never beat the baseline (it resolves to the same coordinates) and so
//! yields no usable alternative.

use std::collections::HashMap;

/// At most this many candidates are considered per request
pub const MAX_CANDIDATES: usize = 4;

/// Lookup table of well-known cities to nearby place names
#[derive(Debug, Clone)]
pub struct NearbyCityTable {
    entries: HashMap<String, Vec<String>>,
}

impl NearbyCityTable {
    /// Build a table from explicit (city, nearby places) pairs. Keys are
    /// matched case-insensitively.
    #[must_use]
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
        S: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(city, nearby)| {
                (
                    city.into().to_lowercase(),
                    nearby.into_iter().map(Into::into).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// The table of well-known cities the original planner shipped with
    #[must_use]
    pub fn well_known() -> Self {
        Self::new([
            ("london", vec!["Cambridge", "Oxford", "Brighton", "Reading"]),
            ("new york", vec!["Newark", "Jersey City", "Yonkers", "Stamford"]),
            (
                "paris",
                vec!["Versailles", "Orly", "Saint-Denis", "Boulogne-Billancourt"],
            ),
            ("tokyo", vec!["Yokohama", "Kawasaki", "Saitama", "Chiba"]),
            (
                "sydney",
                vec!["Parramatta", "Newcastle", "Wollongong", "Penrith"],
            ),
        ])
    }

    /// Candidate place names for a city, capped at [`MAX_CANDIDATES`]. An
    /// unmapped city yields the degenerate self-candidate.
    #[must_use]
    pub fn candidates_for(&self, city: &str) -> Vec<String> {
        let mut candidates = self
            .entries
            .get(&city.to_lowercase())
            .cloned()
            .unwrap_or_else(|| vec![city.to_string()]);
        candidates.truncate(MAX_CANDIDATES);
        candidates
    }
}

impl Default for NearbyCityTable {
    fn default() -> Self {
        Self::well_known()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = NearbyCityTable::well_known();
        assert_eq!(
            table.candidates_for("London"),
            vec!["Cambridge", "Oxford", "Brighton", "Reading"]
        );
        assert_eq!(table.candidates_for("LONDON"), table.candidates_for("london"));
    }

    #[test]
    fn test_unknown_city_falls_back_to_self() {
        let table = NearbyCityTable::well_known();
        assert_eq!(table.candidates_for("Atlantis"), vec!["Atlantis"]);
    }

    #[test]
    fn test_candidates_are_capped() {
        let table = NearbyCityTable::new([("metropolis", vec!["A", "B", "C", "D", "E", "F"])]);
        assert_eq!(table.candidates_for("Metropolis").len(), MAX_CANDIDATES);
    }
}
