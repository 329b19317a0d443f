use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::search_area;
use crate::models::{AreaSearchQuery, Coordinate, ErrorResponse, UpdateLocationRequest};
use crate::routes::{resolve_user_location, store_failed, validation_failed, AppState};

/// Configure map routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/map/search", web::get().to(search))
        .route("/map/location", web::get().to(get_location))
        .route("/map/location", web::put().to(update_location));
}

/// Search places inside the visible map area
///
/// GET /api/v1/map/search?minLatitude=..&maxLatitude=..&minLongitude=..&maxLongitude=..&sort=distance
///
/// Returns markers with their distance from the user, plus `totalCount`.
async fn search(
    state: web::Data<AppState>,
    query: web::Query<AreaSearchQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for map search: {:?}", errors);
        return validation_failed(errors);
    }

    let criterion = query.sort.unwrap_or_default();
    let bbox = query.bounding_box();

    let user_location = match resolve_user_location(state.store.as_ref(), query.location_override()).await {
        Ok(location) => location,
        Err(e) => return store_failed("Failed to load user location", e),
    };

    match search_area(state.store.as_ref(), &bbox, criterion, user_location).await {
        Ok(response) => {
            tracing::info!(
                "Map search returned {} markers (sort: {:?}, located: {})",
                response.total_count,
                criterion,
                user_location.is_some()
            );
            HttpResponse::Ok().json(response)
        }
        Err(e) => store_failed("Failed to search places", e),
    }
}

/// Most recently reported user location
///
/// GET /api/v1/map/location
async fn get_location(state: web::Data<AppState>) -> impl Responder {
    match state.store.current_location().await {
        Ok(Some(location)) => HttpResponse::Ok().json(location),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Location not reported".to_string(),
            message: "No user location has been reported yet".to_string(),
            status_code: 404,
        }),
        Err(e) => store_failed("Failed to load user location", e),
    }
}

/// Report the user's current GPS location
///
/// PUT /api/v1/map/location
///
/// Request body:
/// ```json
/// {
///   "latitude": 35.1796,
///   "longitude": 129.0756
/// }
/// ```
async fn update_location(
    state: web::Data<AppState>,
    req: web::Json<UpdateLocationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state.store.update_location(Coordinate::from(&*req)).await {
        Ok(()) => {
            tracing::debug!("User location updated to ({}, {})", req.latitude, req.longitude);
            HttpResponse::NoContent().finish()
        }
        Err(e) => store_failed("Failed to store user location", e),
    }
}
