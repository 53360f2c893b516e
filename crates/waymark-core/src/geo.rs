//! Coordinate validation and spherical distance math.
//!
//! All functions here are pure. Distances use the haversine formula on a
//! spherical earth; the engine makes no ellipsoidal correction.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Mean earth radius in meters, per the spherical approximation.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A validated latitude/longitude pair in decimal degrees.
///
/// Construction via [`Coordinates::new`] enforces latitude ∈ [-90, 90]
/// and longitude ∈ [-180, 180]; a `Coordinates` value is always in range.
/// Deserialization goes through the same validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    lat: f64,
    lon: f64,
}

/// Unvalidated wire form of [`Coordinates`].
#[derive(Deserialize)]
struct RawCoordinates {
    lat: f64,
    lon: f64,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = Error;

    fn try_from(raw: RawCoordinates) -> Result<Self> {
        Coordinates::new(raw.lat, raw.lon)
    }
}

impl Coordinates {
    /// Validate and construct a coordinate pair.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(Error::InvalidCoordinate(format!(
                "latitude {} out of range [-90, 90]",
                lat
            )));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(Error::InvalidCoordinate(format!(
                "longitude {} out of range [-180, 180]",
                lon
            )));
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// Great-circle distance between two points, in meters.
///
/// Symmetric, and zero exactly when `a == b`.
pub fn distance_meters(a: Coordinates, b: Coordinates) -> f64 {
    if a == b {
        return 0.0;
    }

    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Whether `point` lies within `radius_meters` of `center`, boundary inclusive.
pub fn within_radius(center: Coordinates, point: Coordinates, radius_meters: f64) -> bool {
    distance_meters(center, point) <= radius_meters
}

/// Whether `point` lies inside the box spanned by `north_east` and `south_west`.
///
/// When `south_west.lon > north_east.lon` the box crosses the antimeridian
/// and the valid longitude range wraps through ±180°.
pub fn within_bounds(point: Coordinates, north_east: Coordinates, south_west: Coordinates) -> bool {
    let lat_ok = south_west.lat <= point.lat && point.lat <= north_east.lat;
    if !lat_ok {
        return false;
    }

    if south_west.lon > north_east.lon {
        // Wrapping box: valid longitudes run east from south_west through
        // ±180° to north_east.
        point.lon >= south_west.lon || point.lon <= north_east.lon
    } else {
        south_west.lon <= point.lon && point.lon <= north_east.lon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn coord(lat: f64, lon: f64) -> Coordinates {
        Coordinates::new(lat, lon).unwrap()
    }

    #[test]
    fn test_new_valid_range() {
        assert!(Coordinates::new(0.0, 0.0).is_ok());
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_new_latitude_out_of_range() {
        let err = Coordinates::new(90.01, 0.0).unwrap_err();
        assert!(matches!(err, Error::InvalidCoordinate(_)));
        assert!(Coordinates::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn test_new_longitude_out_of_range() {
        assert!(Coordinates::new(0.0, 180.5).is_err());
        assert!(Coordinates::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_distance_zero_for_identical_points() {
        let a = coord(37.5, 127.0);
        assert_eq!(distance_meters(a, a), 0.0);
    }

    #[test]
    fn test_distance_non_negative_and_symmetric() {
        let a = coord(51.5074, -0.1278); // London
        let b = coord(48.8566, 2.3522); // Paris
        let d_ab = distance_meters(a, b);
        let d_ba = distance_meters(b, a);
        assert!(d_ab > 0.0);
        assert_relative_eq!(d_ab, d_ba);
    }

    #[test]
    fn test_distance_london_paris() {
        // Roughly 344 km great-circle.
        let london = coord(51.5074, -0.1278);
        let paris = coord(48.8566, 2.3522);
        let d = distance_meters(london, paris);
        assert!((330_000.0..360_000.0).contains(&d), "got {}", d);
    }

    #[test]
    fn test_distance_short_hop() {
        // ~1.4 km between two nearby points in Seoul.
        let a = coord(37.50, 127.00);
        let b = coord(37.51, 127.01);
        let d = distance_meters(a, b);
        assert!((1_300.0..1_500.0).contains(&d), "got {}", d);
    }

    #[test]
    fn test_within_radius_boundary_inclusive() {
        let a = coord(37.50, 127.00);
        let b = coord(37.51, 127.01);
        let d = distance_meters(a, b);
        assert!(within_radius(a, b, d));
        assert!(!within_radius(a, b, d - 1.0));
    }

    #[test]
    fn test_within_bounds_plain_box() {
        let ne = coord(38.0, 128.0);
        let sw = coord(37.0, 126.0);
        assert!(within_bounds(coord(37.5, 127.0), ne, sw));
        assert!(!within_bounds(coord(36.9, 127.0), ne, sw));
        assert!(!within_bounds(coord(37.5, 128.1), ne, sw));
    }

    #[test]
    fn test_within_bounds_boundary_inclusive() {
        let ne = coord(38.0, 128.0);
        let sw = coord(37.0, 126.0);
        assert!(within_bounds(coord(37.0, 126.0), ne, sw));
        assert!(within_bounds(coord(38.0, 128.0), ne, sw));
    }

    #[test]
    fn test_within_bounds_antimeridian_wrap() {
        // Box from lon 170 eastward across ±180° to lon -170.
        let ne = coord(10.0, -170.0);
        let sw = coord(-10.0, 170.0);
        assert!(within_bounds(coord(10.0, 180.0), ne, sw));
        assert!(within_bounds(coord(0.0, -175.0), ne, sw));
        assert!(within_bounds(coord(0.0, 175.0), ne, sw));
        assert!(!within_bounds(coord(10.0, 0.0), ne, sw));
    }

    #[test]
    fn test_within_bounds_wrap_latitude_still_checked() {
        let ne = coord(10.0, -170.0);
        let sw = coord(-10.0, 170.0);
        assert!(!within_bounds(coord(11.0, 180.0), ne, sw));
    }

    #[test]
    fn test_coordinates_serde_roundtrip() {
        let a = coord(37.5, 127.0);
        let json = serde_json::to_string(&a).unwrap();
        let back: Coordinates = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }

    #[test]
    fn test_coordinates_deserialize_validates() {
        let result = serde_json::from_str::<Coordinates>(r#"{"lat": 95.0, "lon": 0.0}"#);
        assert!(result.is_err());
    }
}
