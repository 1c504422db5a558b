//! services/api/src/adapters/geocode.rs
//!
//! A static reverse-geocoding table. This is demo plumbing, not a geocoder:
//! coordinates within a degree of a known city snap to that city's name,
//! anything else is unknown.

/// Name, latitude, longitude.
const CITIES: [(&str, f64, f64); 10] = [
    ("San Francisco", 37.7749, -122.4194),
    ("New York", 40.7128, -74.0060),
    ("London", 51.5074, -0.1278),
    ("Paris", 48.8566, 2.3522),
    ("Berlin", 52.5200, 13.4050),
    ("Tokyo", 35.6762, 139.6503),
    ("Sydney", -33.8688, 151.2093),
    ("Lagos", 6.5244, 3.3792),
    ("Mumbai", 19.0760, 72.8777),
    ("Sao Paulo", -23.5505, -46.6333),
];

/// How far (in degrees, per axis) a coordinate may be from a table entry
/// and still resolve to it.
const TOLERANCE_DEGREES: f64 = 1.0;

/// Resolves coordinates to the nearest known city name, if any is close
/// enough.
pub fn reverse_geocode(latitude: f64, longitude: f64) -> Option<&'static str> {
    CITIES
        .iter()
        .filter(|(_, lat, lon)| {
            (latitude - lat).abs() <= TOLERANCE_DEGREES
                && (longitude - lon).abs() <= TOLERANCE_DEGREES
        })
        .min_by(|a, b| {
            let da = (latitude - a.1).abs() + (longitude - a.2).abs();
            let db = (latitude - b.1).abs() + (longitude - b.2).abs();
            da.total_cmp(&db)
        })
        .map(|(name, _, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_coordinates_resolve() {
        assert_eq!(reverse_geocode(37.7749, -122.4194), Some("San Francisco"));
    }

    #[test]
    fn nearby_coordinates_snap_to_the_city() {
        assert_eq!(reverse_geocode(51.6, -0.3), Some("London"));
    }

    #[test]
    fn remote_coordinates_are_unknown() {
        assert_eq!(reverse_geocode(0.0, 0.0), None);
        assert_eq!(reverse_geocode(-89.0, 10.0), None);
    }
}
