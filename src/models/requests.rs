use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::core::ranking::SortCriterion;
use crate::models::domain::{AnswerId, BoundingBox, Coordinate};

/// Request body for the wizard recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    #[serde(rename = "selectedAnswerIds", default)]
    pub selected_answer_ids: Vec<AnswerId>,
}

/// Query string for the wizard recommendation endpoint
///
/// `latitude`/`longitude` override the stored user location for this request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_recommend_location"))]
pub struct RecommendQuery {
    #[serde(default)]
    pub sort: Option<SortCriterion>,
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(default)]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl RecommendQuery {
    pub fn location_override(&self) -> Option<Coordinate> {
        location_pair(self.latitude, self.longitude)
    }
}

/// Query string for the map area search endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_area_query"))]
pub struct AreaSearchQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(rename = "minLatitude")]
    pub min_latitude: f64,
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(rename = "maxLatitude")]
    pub max_latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(rename = "minLongitude")]
    pub min_longitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(rename = "maxLongitude")]
    pub max_longitude: f64,
    #[serde(default)]
    pub sort: Option<SortCriterion>,
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(default)]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl AreaSearchQuery {
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(
            self.min_latitude,
            self.max_latitude,
            self.min_longitude,
            self.max_longitude,
        )
    }

    pub fn location_override(&self) -> Option<Coordinate> {
        location_pair(self.latitude, self.longitude)
    }
}

/// Request body for reporting the user's current location
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateLocationRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl From<&UpdateLocationRequest> for Coordinate {
    fn from(req: &UpdateLocationRequest) -> Self {
        Coordinate::new(req.latitude, req.longitude)
    }
}

fn location_pair(latitude: Option<f64>, longitude: Option<f64>) -> Option<Coordinate> {
    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Some(Coordinate::new(latitude, longitude)),
        _ => None,
    }
}

// `range` lets NaN through
fn check_finite<I: IntoIterator<Item = f64>>(values: I) -> Result<(), ValidationError> {
    if values.into_iter().any(|v| !v.is_finite()) {
        let mut err = ValidationError::new("non_finite_coordinate");
        err.message = Some("coordinates must be finite numbers".into());
        return Err(err);
    }
    Ok(())
}

fn check_location_pair(latitude: Option<f64>, longitude: Option<f64>) -> Result<(), ValidationError> {
    check_finite(latitude.into_iter().chain(longitude))?;
    if latitude.is_some() != longitude.is_some() {
        let mut err = ValidationError::new("location_pair");
        err.message = Some("latitude and longitude must be given together".into());
        return Err(err);
    }
    Ok(())
}

fn validate_recommend_location(query: &RecommendQuery) -> Result<(), ValidationError> {
    check_location_pair(query.latitude, query.longitude)
}

fn validate_area_query(query: &AreaSearchQuery) -> Result<(), ValidationError> {
    check_finite([
        query.min_latitude,
        query.max_latitude,
        query.min_longitude,
        query.max_longitude,
    ])?;
    if query.min_latitude > query.max_latitude || query.min_longitude > query.max_longitude {
        let mut err = ValidationError::new("area_bounds");
        err.message = Some("minimum bounds must not exceed maximum bounds".into());
        return Err(err);
    }
    check_location_pair(query.latitude, query.longitude)
}
