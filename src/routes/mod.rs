// Route exports
pub mod health;
pub mod map;
pub mod wizard;

use actix_web::{web, HttpResponse};
use std::sync::Arc;
use validator::ValidationErrors;

use crate::models::{Coordinate, ErrorResponse};
use crate::services::{Store, StoreError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure)
            .configure(wizard::configure)
            .configure(map::configure),
    );
}

/// Location used for distance ranking: the per-request override, else the
/// most recently reported one
pub(crate) async fn resolve_user_location(
    store: &dyn Store,
    location_override: Option<Coordinate>,
) -> Result<Option<Coordinate>, StoreError> {
    match location_override {
        Some(location) => Ok(Some(location)),
        None => store.current_location().await,
    }
}

pub(crate) fn validation_failed(errors: ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

pub(crate) fn store_failed(context: &str, err: StoreError) -> HttpResponse {
    tracing::error!("{}: {}", context, err);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: context.to_string(),
        message: err.to_string(),
        status_code: 500,
    })
}
