use serde::{Deserialize, Serialize};

use crate::core::distance::optional_distance;
use crate::models::{Coordinate, Place};

/// Ordering applied to recommendation and map search results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortCriterion {
    /// Closest first; unknown distances last
    #[default]
    #[serde(alias = "DISTANCE")]
    Distance,
    /// Highest average rating first
    #[serde(alias = "RATING")]
    Rating,
    /// Most reviewed first, then highest rated
    #[serde(alias = "POPULARITY", alias = "popular")]
    Popularity,
}

/// Sort places by the given criterion
///
/// The sort is stable: places with equal keys keep their input order.
/// A place without a coordinate, or any place when `user_location` is
/// `None`, ranks as infinitely far under [`SortCriterion::Distance`].
pub fn rank(
    places: Vec<Place>,
    criterion: SortCriterion,
    user_location: Option<Coordinate>,
) -> Vec<Place> {
    match criterion {
        SortCriterion::Distance => {
            // Compute each distance once, then sort the keyed pairs
            let mut keyed: Vec<(f64, Place)> = places
                .into_iter()
                .map(|place| {
                    let distance = optional_distance(user_location, place.coordinate())
                        .unwrap_or(f64::INFINITY);
                    (distance, place)
                })
                .collect();

            keyed.sort_by(|(a, _), (b, _)| a.total_cmp(b));
            keyed.into_iter().map(|(_, place)| place).collect()
        }
        SortCriterion::Rating => {
            let mut places = places;
            places.sort_by(|a, b| b.rating().total_cmp(&a.rating()));
            places
        }
        SortCriterion::Popularity => {
            let mut places = places;
            places.sort_by(|a, b| {
                b.review_count
                    .cmp(&a.review_count)
                    .then_with(|| b.rating().total_cmp(&a.rating()))
            });
            places
        }
    }
}

/// Rank and keep at most `limit` places
pub fn rank_top(
    places: Vec<Place>,
    criterion: SortCriterion,
    user_location: Option<Coordinate>,
    limit: usize,
) -> Vec<Place> {
    let mut ranked = rank(places, criterion, user_location);
    ranked.truncate(limit);
    ranked
}
