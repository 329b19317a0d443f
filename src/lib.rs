//! Pawmap - pet-friendly place recommendation and map search service
//!
//! This library provides the wizard recommendation engine (answers to tags
//! to a ranked shortlist of places) and the distance-aware map search that
//! shares its ranking rules.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{distance_meters, rank, recommend, search_area, to_marker, RecommendError, SortCriterion, Tag};
pub use models::{Answer, BoundingBox, Coordinate, Marker, MapSearchResponse, Place, Question};
