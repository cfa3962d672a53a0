// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::figment::Figment;
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use tracing::info;

use crate::config::ServerSettings;
use crate::core::CvDeriver;
use crate::types::{CvSnapshot, CvView, LevelInfo, ParsedDate};

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[post("/cv/derive", data = "<request>")]
pub async fn derive_cv(
    request: Json<CvSnapshot>,
    deriver: &State<CvDeriver>,
) -> Json<DataResponse<CvView>> {
    handlers::derive_handler(request, deriver).await
}

#[post("/cv/parse-date", data = "<request>")]
pub async fn parse_date(request: Json<ParseDateRequest>) -> Json<DataResponse<ParsedDate>> {
    handlers::parse_date_handler(request).await
}

#[get("/cv/levels")]
pub async fn levels() -> Json<DataResponse<Vec<LevelInfo>>> {
    handlers::levels_handler().await
}

#[get("/health")]
pub async fn health() -> Json<DataResponse<HealthInfo>> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Send the body with Content-Type: application/json".to_string(),
        ],
    ))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Endpoint not found".to_string(),
        "NOT_FOUND".to_string(),
        vec!["Check the request path and method".to_string()],
    ))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Request body does not match the expected shape".to_string(),
        "UNPROCESSABLE_ENTITY".to_string(),
        vec![
            "Verify field types, e.g. ids are numbers and dates are strings".to_string(),
        ],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec!["Try again in a few moments".to_string()],
    ))
}

/// Assemble the API on the given rocket configuration.
pub fn build_rocket(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(Cors)
        .manage(CvDeriver::new())
        .register(
            "/api",
            catchers![bad_request, not_found, unprocessable, internal_error],
        )
        .mount(
            "/api",
            routes![derive_cv, parse_date, levels, health, options],
        )
}

pub async fn start_web_server(settings: &ServerSettings) -> Result<()> {
    let figment = rocket::Config::figment()
        .merge(("address", settings.address.clone()))
        .merge(("port", settings.port));

    info!("Starting CV builder API server");
    info!("Server: http://{}:{}/api", settings.address, settings.port);

    build_rocket(figment)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Web server failed: {}", e))?;

    Ok(())
}
