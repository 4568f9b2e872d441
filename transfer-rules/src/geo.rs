//! Geographic coordinates and distances between stops.

use serde::{Deserialize, Serialize};

/// Earth radius used for distance approximation, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_378_135.0;

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create a new position from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other`, in meters.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        approximate_distance(self, other)
    }
}

/// Approximate great-circle distance between two positions, in meters.
///
/// Uses the haversine formula on a spherical earth, which is accurate to
/// well under a meter at transfer-scale distances.
///
/// # Examples
///
/// ```
/// use transfer_rules::geo::{Coordinates, approximate_distance};
///
/// let a = Coordinates::new(52.5200, 13.4050);
/// assert_eq!(approximate_distance(&a, &a), 0.0);
/// ```
pub fn approximate_distance(a: &Coordinates, b: &Coordinates) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (0.5 * (lat2 - lat1)).sin();
    let dlon = (0.5 * (b.longitude.to_radians() - a.longitude.to_radians())).sin();

    let x = dlat * dlat + dlon * dlon * lat1.cos() * lat2.cos();
    EARTH_RADIUS_METERS * 2.0 * x.sqrt().atan2((1.0 - x).max(0.0).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Position `meters` due north of `origin`.
    fn north_of(origin: Coordinates, meters: f64) -> Coordinates {
        Coordinates::new(
            origin.latitude + (meters / EARTH_RADIUS_METERS).to_degrees(),
            origin.longitude,
        )
    }

    #[test]
    fn zero_for_same_point() {
        let p = Coordinates::new(48.8566, 2.3522);
        assert_eq!(approximate_distance(&p, &p), 0.0);
    }

    #[test]
    fn meridian_distance() {
        let origin = Coordinates::new(40.0, -74.0);
        for meters in [100.0, 500.0, 1500.0, 10_000.0] {
            let d = approximate_distance(&origin, &north_of(origin, meters));
            assert!((d - meters).abs() < 1e-6, "expected {meters}, got {d}");
        }
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(0.0, 1.0);
        let expected = EARTH_RADIUS_METERS * 1f64.to_radians();
        assert!((approximate_distance(&a, &b) - expected).abs() < 1e-6);
    }

    #[test]
    fn distance_to_matches_free_function() {
        let a = Coordinates::new(51.5308, -0.1238);
        let b = Coordinates::new(51.5282, -0.1337);
        assert_eq!(a.distance_to(&b), approximate_distance(&a, &b));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coordinates() -> impl Strategy<Value = Coordinates> {
        (-85.0f64..85.0, -180.0f64..180.0).prop_map(|(lat, lon)| Coordinates::new(lat, lon))
    }

    proptest! {
        /// Distance does not depend on direction
        #[test]
        fn symmetric(a in coordinates(), b in coordinates()) {
            let ab = approximate_distance(&a, &b);
            let ba = approximate_distance(&b, &a);
            prop_assert!((ab - ba).abs() < 1e-6);
        }

        /// Distance is never negative and never exceeds half the circumference
        #[test]
        fn bounded(a in coordinates(), b in coordinates()) {
            let d = approximate_distance(&a, &b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_METERS + 1e-6);
        }
    }
}
