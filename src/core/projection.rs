use crate::core::distance::optional_distance;
use crate::models::{Coordinate, Marker, Place};

/// Project a place into a map marker
///
/// Never fails. `distance` is only set when both the user location and
/// the place coordinate are known.
pub fn to_marker(place: Place, user_location: Option<Coordinate>) -> Marker {
    let distance = optional_distance(user_location, place.coordinate());

    Marker {
        place_id: place.id,
        name: place.name,
        latitude: place.latitude,
        longitude: place.longitude,
        distance,
        rating: place.avg_rating,
        short_description: place.short_description,
    }
}
