// Core algorithm exports
pub mod distance;
pub mod matcher;
pub mod projection;
pub mod ranking;
pub mod search;
pub mod tags;

pub use distance::{distance_meters, haversine_distance, optional_distance, EARTH_RADIUS_M};
pub use matcher::{collect_tags, recommend, resolve_tags, select_recommendations, RecommendError, RECOMMENDATION_LIMIT};
pub use projection::to_marker;
pub use ranking::{rank, rank_top, SortCriterion};
pub use search::{build_search_response, search_area};
pub use tags::{Dimension, Tag, UnknownTag};
