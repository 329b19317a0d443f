// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Answer, AnswerId, BoundingBox, Coordinate, Marker, Place, PlaceId, Question, QuestionId, TagSet};
pub use requests::{AreaSearchQuery, RecommendQuery, RecommendRequest, UpdateLocationRequest};
pub use responses::{ErrorResponse, HealthResponse, MapSearchResponse};
