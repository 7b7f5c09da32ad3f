//! Great-circle distance between coordinates.

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Mean Earth radius in kilometres, as used by the haversine formula.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 coordinate pair.
///
/// Serialized as `{ "lat": ..., "lng": ... }` to match the on-disk config
/// and cache formats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    /// Build a location, validating coordinate ranges.
    ///
    /// # Errors
    ///
    /// Returns `CoreError` if `lat` is outside [-90, 90] or `lng` is outside
    /// [-180, 180].
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoreError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoreError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(CoreError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }
}

/// Haversine great-circle distance between two points, in kilometres.
///
/// Symmetric, and exactly `0.0` when both points are identical.
#[must_use]
pub fn distance_km(a: Location, b: Location) -> f64 {
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (dlng / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(lat: f64, lng: f64) -> Location {
        Location::new(lat, lng).unwrap()
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = loc(19.4326, -99.1332);
        assert_eq!(distance_km(a, a), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = loc(19.4326, -99.1332);
        let b = loc(19.3910, -99.2837);
        assert_eq!(distance_km(a, b), distance_km(b, a));
    }

    #[test]
    fn cdmx_to_guadalajara_roughly_460km() {
        // Mexico City zócalo to Guadalajara centre; great-circle ≈ 460 km.
        let cdmx = loc(19.4326, -99.1332);
        let gdl = loc(20.6597, -103.3496);
        let d = distance_km(cdmx, gdl);
        assert!(
            (d - 460.0).abs() < 10.0,
            "expected ~460 km, got {d:.1} km"
        );
    }

    #[test]
    fn short_distance_within_city() {
        // Two points ~1.1 km apart in Mexico City.
        let a = loc(19.4326, -99.1332);
        let b = loc(19.4426, -99.1332);
        let d = distance_km(a, b);
        assert!(d > 1.0 && d < 1.3, "expected ~1.1 km, got {d:.2} km");
    }

    #[test]
    fn new_rejects_out_of_range_latitude() {
        assert!(matches!(
            Location::new(91.0, 0.0),
            Err(CoreError::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            Location::new(-90.5, 0.0),
            Err(CoreError::LatitudeOutOfRange(_))
        ));
    }

    #[test]
    fn new_rejects_out_of_range_longitude() {
        assert!(matches!(
            Location::new(0.0, 180.5),
            Err(CoreError::LongitudeOutOfRange(_))
        ));
    }

    #[test]
    fn new_accepts_boundary_values() {
        assert!(Location::new(90.0, 180.0).is_ok());
        assert!(Location::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn serde_round_trip_uses_lat_lng_keys() {
        let a = loc(19.4326, -99.1332);
        let json = serde_json::to_string(&a).unwrap();
        assert!(json.contains("\"lat\""));
        assert!(json.contains("\"lng\""));
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }
}
