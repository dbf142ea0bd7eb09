//! Great-circle distance between coordinates

use crate::models::Coordinate;
use crate::util::round1;

/// Mean Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates in kilometers, rounded to one
/// decimal place. Symmetric, and zero for identical coordinates.
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    round1(EARTH_RADIUS_KM * 2.0 * h.sqrt().asin())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn test_distance_zero_for_identical_coordinates() {
        let c = coord(51.5074, -0.1278);
        assert_eq!(distance_km(c, c), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let london = coord(51.5074, -0.1278);
        let cambridge = coord(52.2053, 0.1218);
        assert_eq!(distance_km(london, cambridge), distance_km(cambridge, london));
    }

    #[test]
    fn test_one_degree_of_latitude_on_equator() {
        // 1° of latitude is ~111.2 km on a 6371 km sphere
        let d = distance_km(coord(0.0, 0.0), coord(1.0, 0.0));
        assert!((d - 111.2).abs() < 0.5, "got {d}");
    }

    #[test]
    fn test_distance_rounded_to_one_decimal() {
        let d = distance_km(coord(51.5074, -0.1278), coord(52.2053, 0.1218));
        assert_eq!(d, round1(d));
    }
}
