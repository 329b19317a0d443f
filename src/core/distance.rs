use geo::{coord, Intersects, Rect};

use crate::models::{BoundingBox, Coordinate};

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate the Haversine distance between two points in meters
///
/// Commutative, zero for identical points. Inputs are not validated;
/// NaN coordinates produce NaN.
#[inline]
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    haversine_distance(a.latitude, a.longitude, b.latitude, b.longitude)
}

/// Calculate the Haversine distance between two points in meters
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Distance from the user to a place, when both locations are known
#[inline]
pub fn optional_distance(user: Option<Coordinate>, place: Option<Coordinate>) -> Option<f64> {
    match (user, place) {
        (Some(user), Some(place)) => Some(distance_meters(user, place)),
        _ => None,
    }
}

impl BoundingBox {
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Check if a point is within the box, edges included
    #[inline]
    pub fn contains(&self, point: Coordinate) -> bool {
        // Rect::new normalizes corners; an inverted box must stay empty
        if self.min_lat > self.max_lat || self.min_lon > self.max_lon {
            return false;
        }
        let rect = Rect::new(
            coord! { x: self.min_lon, y: self.min_lat },
            coord! { x: self.max_lon, y: self.max_lat },
        );
        rect.intersects(&coord! { x: point.longitude, y: point.latitude })
    }
}
