use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use tokio::sync::RwLock;

use crate::models::{Answer, AnswerId, BoundingBox, Coordinate, Place, Question, TagSet};
use crate::services::store::{AnswerStore, LocationStore, PlaceStore, QuestionStore, Store, StoreError};

/// Catalog loaded into an [`InMemoryStore`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub places: Vec<Place>,
    #[serde(default)]
    pub location: Option<Coordinate>,
}

/// Store backed by process memory
///
/// The question and place catalog is fixed at construction; only the
/// reported user location changes afterwards. Query semantics mirror
/// the PostgreSQL store (inclusive bounds, insertion order).
pub struct InMemoryStore {
    questions: Vec<Question>,
    places: Vec<Place>,
    location: RwLock<Option<Coordinate>>,
}

impl InMemoryStore {
    pub fn new(mut questions: Vec<Question>, places: Vec<Place>) -> Self {
        questions.sort_by_key(|q| q.step);
        for question in &mut questions {
            for answer in &mut question.answers {
                answer.question_id = question.id;
            }
        }

        Self {
            questions,
            places,
            location: RwLock::new(None),
        }
    }

    pub fn from_seed(seed: SeedData) -> Self {
        let store = Self::new(seed.questions, seed.places);
        Self {
            location: RwLock::new(seed.location),
            ..store
        }
    }

    /// Load a JSON seed file (`{"questions": [...], "places": [...]}`)
    pub async fn from_seed_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let raw = tokio::fs::read(path.as_ref()).await?;
        let seed: SeedData = serde_json::from_slice(&raw)?;

        tracing::info!(
            "Loaded seed file {} ({} questions, {} places)",
            path.as_ref().display(),
            seed.questions.len(),
            seed.places.len()
        );

        Ok(Self::from_seed(seed))
    }
}

#[async_trait]
impl QuestionStore for InMemoryStore {
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.questions.clone())
    }
}

#[async_trait]
impl AnswerStore for InMemoryStore {
    async fn find_answer_by_id(&self, id: AnswerId) -> Result<Option<Answer>, StoreError> {
        Ok(self
            .questions
            .iter()
            .flat_map(|q| q.answers.iter())
            .find(|a| a.id == id)
            .cloned())
    }
}

#[async_trait]
impl PlaceStore for InMemoryStore {
    async fn find_places_by_tags(&self, tags: &TagSet) -> Result<Vec<Place>, StoreError> {
        Ok(self
            .places
            .iter()
            .filter(|p| p.matches_any(tags))
            .cloned()
            .collect())
    }

    async fn find_places_in_bounding_box(
        &self,
        bbox: &BoundingBox,
    ) -> Result<Vec<Place>, StoreError> {
        Ok(self
            .places
            .iter()
            .filter(|p| p.coordinate().is_some_and(|c| bbox.contains(c)))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl LocationStore for InMemoryStore {
    async fn current_location(&self) -> Result<Option<Coordinate>, StoreError> {
        Ok(*self.location.read().await)
    }

    async fn update_location(&self, location: Coordinate) -> Result<(), StoreError> {
        *self.location.write().await = Some(location);
        Ok(())
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tags::Tag;

    fn create_place(id: i64, coordinate: Option<(f64, f64)>, tags: &[Tag]) -> Place {
        Place {
            id,
            name: format!("Place {}", id),
            address: None,
            short_description: None,
            latitude: coordinate.map(|c| c.0),
            longitude: coordinate.map(|c| c.1),
            avg_rating: None,
            review_count: 0,
            tags: tags.iter().copied().collect(),
        }
    }

    fn create_question(id: i64, step: u32, answers: &[(AnswerId, Tag)]) -> Question {
        Question {
            id,
            step,
            text: format!("Question {}", step),
            answers: answers
                .iter()
                .map(|&(answer_id, tag)| Answer {
                    id: answer_id,
                    text: tag.to_string(),
                    tag,
                    question_id: 0,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_questions_sorted_by_step() {
        let store = InMemoryStore::new(
            vec![
                create_question(10, 2, &[(3, Tag::EnergyHigh)]),
                create_question(11, 1, &[(1, Tag::SizeSmall)]),
            ],
            vec![],
        );

        let questions = store.list_questions().await.unwrap();

        assert_eq!(questions.iter().map(|q| q.step).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(questions[0].answers[0].question_id, 11);
    }

    #[tokio::test]
    async fn test_find_answer_by_id() {
        let store = InMemoryStore::new(
            vec![create_question(1, 1, &[(1, Tag::SizeSmall), (2, Tag::SizeLarge)])],
            vec![],
        );

        let answer = store.find_answer_by_id(2).await.unwrap().unwrap();
        assert_eq!(answer.tag, Tag::SizeLarge);
        assert!(store.find_answer_by_id(404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_places_in_bbox_skip_missing_coordinates() {
        let store = InMemoryStore::new(
            vec![],
            vec![
                create_place(1, Some((37.5, 127.0)), &[]),
                create_place(2, None, &[]),
                create_place(3, Some((36.0, 127.0)), &[]),
            ],
        );

        let bbox = BoundingBox::new(37.0, 38.0, 126.5, 127.5);
        let found = store.find_places_in_bounding_box(&bbox).await.unwrap();

        assert_eq!(found.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);
    }

    #[tokio::test]
    async fn test_location_round_trip() {
        let store = InMemoryStore::new(vec![], vec![]);
        assert!(store.current_location().await.unwrap().is_none());

        store.update_location(Coordinate::new(35.0, 128.0)).await.unwrap();
        assert_eq!(store.current_location().await.unwrap(), Some(Coordinate::new(35.0, 128.0)));
    }

    #[tokio::test]
    async fn test_missing_seed_file() {
        let result = InMemoryStore::from_seed_file("does/not/exist.json").await;
        assert!(matches!(result, Err(StoreError::SeedIo(_))));
    }
}
