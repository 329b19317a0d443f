use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{recommend, RecommendError};
use crate::models::{ErrorResponse, RecommendQuery, RecommendRequest};
use crate::routes::{resolve_user_location, store_failed, validation_failed, AppState};

/// Configure wizard routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/wizard/questions", web::get().to(list_questions))
        .route("/wizard/recommend", web::post().to(recommend_places));
}

/// List wizard questions
///
/// GET /api/v1/wizard/questions
///
/// Questions are ordered by step, each with its answers and their
/// `matchingTag`.
async fn list_questions(state: web::Data<AppState>) -> impl Responder {
    match state.store.list_questions().await {
        Ok(questions) => HttpResponse::Ok().json(questions),
        Err(e) => store_failed("Failed to load wizard questions", e),
    }
}

/// Recommend places for the selected answers
///
/// POST /api/v1/wizard/recommend?sort=distance|rating|popularity
///
/// Request body:
/// ```json
/// {
///   "selectedAnswerIds": [1, 4, 6, 9]
/// }
/// ```
async fn recommend_places(
    state: web::Data<AppState>,
    query: web::Query<RecommendQuery>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(errors);
    }

    let criterion = query.sort.unwrap_or_default();

    let user_location = match resolve_user_location(state.store.as_ref(), query.location_override()).await {
        Ok(location) => location,
        Err(e) => return store_failed("Failed to load user location", e),
    };

    tracing::info!(
        "Recommending places for {} answers, sort: {:?}",
        req.selected_answer_ids.len(),
        criterion
    );

    let result = recommend(
        state.store.as_ref(),
        state.store.as_ref(),
        &req.selected_answer_ids,
        criterion,
        user_location,
    )
    .await;

    match result {
        Ok(places) => {
            tracing::info!("Returning {} recommended places", places.len());
            HttpResponse::Ok().json(places)
        }
        Err(RecommendError::NoMatch) => {
            tracing::info!("No places matched answers {:?}", req.selected_answer_ids);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "no_match".to_string(),
                message: "Sorry, we couldn't find a place that fits your answers.".to_string(),
                status_code: 404,
            })
        }
        Err(RecommendError::Store(e)) => store_failed("Failed to recommend places", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Place, Question};
    use crate::routes::{configure_routes, test_support::seeded_state};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    macro_rules! init_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(seeded_state()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    fn ids(places: &[Place]) -> Vec<i64> {
        places.iter().map(|p| p.id).collect()
    }

    #[actix_web::test]
    async fn test_questions_in_step_order() {
        let app = init_app!();

        let req = test::TestRequest::get().uri("/api/v1/wizard/questions").to_request();
        let questions: Vec<Question> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(questions.iter().map(|q| q.step).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(questions[0].answers.len(), 3);
    }

    #[actix_web::test]
    async fn test_recommend_by_popularity() {
        let app = init_app!();

        // Answer 1 is SIZE_SMALL
        let req = test::TestRequest::post()
            .uri("/api/v1/wizard/recommend?sort=popularity")
            .set_json(json!({ "selectedAnswerIds": [1] }))
            .to_request();
        let places: Vec<Place> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(ids(&places), vec![4, 1, 2]);
    }

    #[actix_web::test]
    async fn test_recommend_by_rating() {
        let app = init_app!();

        // Answer 3 is SIZE_LARGE; place 5 is unrated
        let req = test::TestRequest::post()
            .uri("/api/v1/wizard/recommend?sort=rating")
            .set_json(json!({ "selectedAnswerIds": [3] }))
            .to_request();
        let places: Vec<Place> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(ids(&places), vec![3, 1, 5]);
    }

    #[actix_web::test]
    async fn test_recommend_defaults_to_distance_from_stored_location() {
        let app = init_app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/wizard/recommend")
            .set_json(json!({ "selectedAnswerIds": [3] }))
            .to_request();
        let places: Vec<Place> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(ids(&places), vec![1, 5, 3]);
    }

    #[actix_web::test]
    async fn test_recommend_with_location_override() {
        let app = init_app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/wizard/recommend?sort=distance&latitude=35.31&longitude=129.01")
            .set_json(json!({ "selectedAnswerIds": [3] }))
            .to_request();
        let places: Vec<Place> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(ids(&places), vec![5, 3, 1]);
    }

    #[actix_web::test]
    async fn test_recommend_no_match() {
        let app = init_app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/wizard/recommend")
            .set_json(json!({ "selectedAnswerIds": [999] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "no_match");
    }

    #[actix_web::test]
    async fn test_recommend_rejects_unknown_sort() {
        let app = init_app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/wizard/recommend?sort=newest")
            .set_json(json!({ "selectedAnswerIds": [1] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_recommend_rejects_half_location() {
        let app = init_app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/wizard/recommend?latitude=35.0")
            .set_json(json!({ "selectedAnswerIds": [1] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_recommend_rejects_nan_location() {
        let app = init_app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/wizard/recommend?latitude=NaN&longitude=NaN")
            .set_json(json!({ "selectedAnswerIds": [1] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
