use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::core::tags::Tag;

pub type PlaceId = i64;
pub type QuestionId = i64;
pub type AnswerId = i64;

/// Set of recommendation tags, ordered for deterministic iteration
pub type TagSet = BTreeSet<Tag>;

/// WGS84 point in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// A pet-friendly place as read from the place store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(rename = "placeId")]
    pub id: PlaceId,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(rename = "shortDescription", default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(rename = "avgRating", default)]
    pub avg_rating: Option<f64>,
    #[serde(rename = "reviewCount", default)]
    pub review_count: u32,
    #[serde(default)]
    pub tags: TagSet,
}

impl Place {
    /// Location of the place, if both latitude and longitude are known
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinate::new(latitude, longitude)),
            _ => None,
        }
    }

    /// Helper to get avg_rating, defaulting to 0.0 for unrated places
    pub fn rating(&self) -> f64 {
        self.avg_rating.unwrap_or(0.0)
    }

    /// True if the place carries any of the given tags
    pub fn matches_any(&self, tags: &TagSet) -> bool {
        !self.tags.is_disjoint(tags)
    }
}

/// A single selectable answer of a wizard question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "answerId")]
    pub id: AnswerId,
    #[serde(rename = "answerText")]
    pub text: String,
    #[serde(rename = "matchingTag")]
    pub tag: Tag,
    #[serde(rename = "questionId", default)]
    pub question_id: QuestionId,
}

/// A wizard question with its ordered answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "questionId")]
    pub id: QuestionId,
    pub step: u32,
    #[serde(rename = "questionText")]
    pub text: String,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

/// Display-ready map marker for a place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    #[serde(rename = "placeId")]
    pub place_id: PlaceId,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Distance from the user in meters
    pub distance: Option<f64>,
    pub rating: Option<f64>,
    #[serde(rename = "shortDescription")]
    pub short_description: Option<String>,
}

/// Geospatial bounding box (inclusive on every edge)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(latitude: Option<f64>, longitude: Option<f64>) -> Place {
        Place {
            id: 1,
            name: "Han River Dog Park".to_string(),
            address: None,
            short_description: None,
            latitude,
            longitude,
            avg_rating: None,
            review_count: 0,
            tags: TagSet::new(),
        }
    }

    #[test]
    fn test_coordinate_requires_both_axes() {
        assert_eq!(place(Some(37.5), Some(127.0)).coordinate(), Some(Coordinate::new(37.5, 127.0)));
        assert_eq!(place(Some(37.5), None).coordinate(), None);
        assert_eq!(place(None, Some(127.0)).coordinate(), None);
    }

    #[test]
    fn test_missing_rating_reads_as_zero() {
        assert_eq!(place(None, None).rating(), 0.0);
    }

    #[test]
    fn test_place_deserializes_with_defaults() {
        let json = r#"{"placeId": 7, "name": "Cafe Mung", "tags": ["SIZE_SMALL", "TYPE_CITY"]}"#;
        let place: Place = serde_json::from_str(json).unwrap();

        assert_eq!(place.id, 7);
        assert_eq!(place.review_count, 0);
        assert!(place.avg_rating.is_none());
        assert!(place.tags.contains(&Tag::SizeSmall));
        assert!(place.tags.contains(&Tag::TypeCity));
    }

    #[test]
    fn test_answer_wire_names() {
        let answer = Answer {
            id: 3,
            text: "Large".to_string(),
            tag: Tag::SizeLarge,
            question_id: 1,
        };
        let value = serde_json::to_value(&answer).unwrap();

        assert_eq!(value["answerId"], 3);
        assert_eq!(value["answerText"], "Large");
        assert_eq!(value["matchingTag"], "SIZE_LARGE");
    }
}
