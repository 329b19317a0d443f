use crate::core::projection::to_marker;
use crate::core::ranking::{rank, SortCriterion};
use crate::models::{BoundingBox, Coordinate, MapSearchResponse, Place};
use crate::services::store::{PlaceStore, StoreError};

/// Rank places and project them into markers
pub fn build_search_response(
    places: Vec<Place>,
    criterion: SortCriterion,
    user_location: Option<Coordinate>,
) -> MapSearchResponse {
    let markers: Vec<_> = rank(places, criterion, user_location)
        .into_iter()
        .map(|place| to_marker(place, user_location))
        .collect();

    MapSearchResponse {
        total_count: markers.len(),
        markers,
    }
}

/// Search places inside a map area
pub async fn search_area<P>(
    places: &P,
    bbox: &BoundingBox,
    criterion: SortCriterion,
    user_location: Option<Coordinate>,
) -> Result<MapSearchResponse, StoreError>
where
    P: PlaceStore + ?Sized,
{
    let found = places.find_places_in_bounding_box(bbox).await?;

    tracing::debug!("Found {} places in {:?}", found.len(), bbox);

    Ok(build_search_response(found, criterion, user_location))
}
