//! Location models: coordinates, geocoding queries and geocoding results

use serde::{Deserialize, Serialize};

use crate::PlannerError;

/// A validated geographic coordinate
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees, [-90, 90]
    pub latitude: f64,
    /// Longitude in decimal degrees, [-180, 180]
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting out-of-range values
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, PlannerError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(PlannerError::validation(format!(
                "latitude {latitude} out of range [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(PlannerError::validation(format!(
                "longitude {longitude} out of range [-180, 180]"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Format as a "lat, lon" display string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// What the caller wants geocoded: a place within a city within a country.
///
/// An empty `place` falls back to the city itself, mirroring the web form
/// where the place field is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    pub country: String,
    pub city: String,
    pub place: String,
}

impl LocationQuery {
    #[must_use]
    pub fn new(country: &str, city: &str, place: Option<&str>) -> Self {
        let place = match place {
            Some(p) if !p.trim().is_empty() => p.trim().to_string(),
            _ => city.trim().to_string(),
        };
        Self {
            country: country.trim().to_string(),
            city: city.trim().to_string(),
            place,
        }
    }

    /// The free-text query sent to the geocoder, "place, city, country"
    /// collapsing to "city, country" when place and city coincide.
    #[must_use]
    pub fn search_text(&self) -> String {
        if self.place.eq_ignore_ascii_case(&self.city) {
            format!("{}, {}", self.city, self.country)
        } else {
            format!("{}, {}, {}", self.place, self.city, self.country)
        }
    }
}

/// Successful geocoder output
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ResolvedLocation {
    /// Display name reported by the geocoder
    pub name: String,
    pub coordinate: Coordinate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_validation() {
        assert!(Coordinate::new(51.5074, -0.1278).is_ok());
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(90.1, 0.0).is_err());
        assert!(Coordinate::new(0.0, -180.5).is_err());
    }

    #[test]
    fn test_coordinate_formatting() {
        let c = Coordinate::new(46.8182, 8.2275).unwrap();
        assert_eq!(c.format_coordinates(), "46.8182, 8.2275");
    }

    #[test]
    fn test_query_place_falls_back_to_city() {
        let q = LocationQuery::new("UK", "London", None);
        assert_eq!(q.place, "London");
        assert_eq!(q.search_text(), "London, UK");

        let q = LocationQuery::new("UK", "London", Some("  "));
        assert_eq!(q.place, "London");
    }

    #[test]
    fn test_query_search_text_with_place() {
        let q = LocationQuery::new("UK", "London", Some("Hyde Park"));
        assert_eq!(q.search_text(), "Hyde Park, London, UK");
    }
}
