use thiserror::Error;

use crate::core::ranking::{rank_top, SortCriterion};
use crate::models::{Answer, AnswerId, Coordinate, Place, TagSet};
use crate::services::store::{AnswerStore, PlaceStore, StoreError};

/// Number of places a wizard recommendation returns
pub const RECOMMENDATION_LIMIT: usize = 3;

/// Errors produced by the recommendation pipeline
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The selected answers matched no place; shown to the user, not a fault
    #[error("No places matched the selected answers")]
    NoMatch,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Collect the distinct tags carried by a set of answers
pub fn collect_tags<'a>(answers: impl IntoIterator<Item = &'a Answer>) -> TagSet {
    answers.into_iter().map(|answer| answer.tag).collect()
}

/// Resolve answer ids to their tags
///
/// Ids that do not resolve to an answer are skipped.
pub async fn resolve_tags<A>(answers: &A, answer_ids: &[AnswerId]) -> Result<TagSet, StoreError>
where
    A: AnswerStore + ?Sized,
{
    let mut resolved = Vec::with_capacity(answer_ids.len());

    for &id in answer_ids {
        match answers.find_answer_by_id(id).await? {
            Some(answer) => resolved.push(answer),
            None => tracing::debug!("Skipping unknown answer id {}", id),
        }
    }

    Ok(collect_tags(&resolved))
}

/// Rank candidates and keep the top [`RECOMMENDATION_LIMIT`]
pub fn select_recommendations(
    candidates: Vec<Place>,
    criterion: SortCriterion,
    user_location: Option<Coordinate>,
) -> Result<Vec<Place>, RecommendError> {
    if candidates.is_empty() {
        return Err(RecommendError::NoMatch);
    }

    Ok(rank_top(candidates, criterion, user_location, RECOMMENDATION_LIMIT))
}

/// Recommend places for a set of selected wizard answers
///
/// # Pipeline Stages
/// 1. Resolve answer ids to tags (unknown ids dropped)
/// 2. Fetch places carrying any of the tags
/// 3. Rank by `criterion` and keep the first three
pub async fn recommend<A, P>(
    answers: &A,
    places: &P,
    answer_ids: &[AnswerId],
    criterion: SortCriterion,
    user_location: Option<Coordinate>,
) -> Result<Vec<Place>, RecommendError>
where
    A: AnswerStore + ?Sized,
    P: PlaceStore + ?Sized,
{
    let tags = resolve_tags(answers, answer_ids).await?;

    let candidates = if tags.is_empty() {
        Vec::new()
    } else {
        places.find_places_by_tags(&tags).await?
    };

    tracing::debug!(
        "Resolved {} tags from {} answer ids, {} candidate places",
        tags.len(),
        answer_ids.len(),
        candidates.len()
    );

    select_recommendations(candidates, criterion, user_location)
}
