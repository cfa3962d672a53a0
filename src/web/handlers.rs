// src/web/handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::{debug, info};

use crate::core::{is_ongoing, level_table, parse_date, CvDeriver};
use crate::types::{CvSnapshot, CvView, LevelInfo, ParsedDate};
use crate::web::types::*;

pub async fn derive_handler(
    request: Json<CvSnapshot>,
    deriver: &State<CvDeriver>,
) -> Json<DataResponse<CvView>> {
    let snapshot = request.into_inner();
    debug!(
        "Deriving view: {} education, {} work, {} courses, {} awards, {} languages",
        snapshot.education.len(),
        snapshot.work_experience.len(),
        snapshot.courses.len(),
        snapshot.awards.len(),
        snapshot.languages.len()
    );

    Json(DataResponse::success(deriver.derive(&snapshot)))
}

pub async fn parse_date_handler(request: Json<ParseDateRequest>) -> Json<DataResponse<ParsedDate>> {
    let text = request.into_inner().text;
    let parsed = ParsedDate {
        ordinal: parse_date(&text),
        ongoing: is_ongoing(&text),
        text,
    };

    let response = if parsed.ordinal == 0 && !parsed.text.is_empty() {
        DataResponse::success(parsed).with_message("Unrecognised date, sorted as oldest")
    } else {
        DataResponse::success(parsed)
    };
    Json(response)
}

pub async fn levels_handler() -> Json<DataResponse<Vec<LevelInfo>>> {
    Json(DataResponse::success(level_table()))
}

pub async fn health_handler() -> Json<DataResponse<HealthInfo>> {
    info!("Health check");
    Json(DataResponse::success(HealthInfo {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
