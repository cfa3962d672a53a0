use cv_builder::types::{CvView, LevelInfo, ParsedDate};
use cv_builder::web::{build_rocket, DataResponse, HealthInfo, StandardErrorResponse};
use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;

fn client() -> Client {
    Client::tracked(build_rocket(rocket::Config::figment())).expect("valid rocket instance")
}

#[test]
fn derive_returns_sorted_view() {
    let client = client();
    let body = r#"{
        "personalData": { "name": "Test User", "geburtsdatum": "1990-01-01", "geburtsort": "Berlin" },
        "berufserfahrungen": [
            { "id": 1, "title": "Junior", "dateFrom": "2017", "dateTo": "2019" },
            { "id": 2, "title": "Senior", "dateFrom": "2021", "dateTo": "present" },
            { "id": 3, "title": "Mid", "dateFrom": "2019", "dateTo": "2021" }
        ],
        "kenntnisse": "Go, , Rust ,  ",
        "sprachen": [ { "id": 4, "sprache": "Englisch", "niveau": "Fließend" } ]
    }"#;

    let response = client
        .post("/api/cv/derive")
        .header(ContentType::JSON)
        .body(body)
        .dispatch();

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );

    let envelope: DataResponse<CvView> = response.into_json().expect("json body");
    assert!(envelope.success);

    let view = envelope.data;
    let order: Vec<u64> = view.work_experience.iter().map(|e| e.id).collect();
    assert_eq!(order, vec![2, 3, 1]);
    assert_eq!(view.personal.birth_info, "1.1.1990, Berlin");
    assert_eq!(view.skills, vec!["Go", "Rust"]);
    assert_eq!(view.languages[0].level_value, 5);
    assert!(view.flags.work_experience);
    assert!(!view.flags.education);
}

#[test]
fn derive_rejects_malformed_json() {
    let client = client();
    let response = client
        .post("/api/cv/derive")
        .header(ContentType::JSON)
        .body("{ not json")
        .dispatch();

    assert!(response.status().code >= 400);
    let error: StandardErrorResponse = response.into_json().expect("error envelope");
    assert!(!error.success);
    assert!(!error.suggestions.is_empty());
}

#[test]
fn parse_date_reports_ordinal() {
    let client = client();

    let response = client
        .post("/api/cv/parse-date")
        .header(ContentType::JSON)
        .body(r#"{ "text": "abc" }"#)
        .dispatch();
    let envelope: DataResponse<ParsedDate> = response.into_json().expect("json body");
    assert_eq!(envelope.data.ordinal, 0);
    assert!(!envelope.data.ongoing);
    assert!(envelope.message.is_some());

    let response = client
        .post("/api/cv/parse-date")
        .header(ContentType::JSON)
        .body(r#"{ "text": "Aktuell" }"#)
        .dispatch();
    let envelope: DataResponse<ParsedDate> = response.into_json().expect("json body");
    assert!(envelope.data.ongoing);
    assert!(envelope.data.ordinal > 0);
}

#[test]
fn levels_lists_six_labels_in_order() {
    let client = client();
    let response = client.get("/api/cv/levels").dispatch();

    let envelope: DataResponse<Vec<LevelInfo>> = response.into_json().expect("json body");
    let values: Vec<u8> = envelope.data.iter().map(|level| level.value).collect();
    assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(envelope.data[5].label, "Muttersprache");
}

#[test]
fn health_and_unknown_routes() {
    let client = client();

    let response = client.get("/api/health").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let envelope: DataResponse<HealthInfo> = response.into_json().expect("json body");
    assert_eq!(envelope.data.status, "ok");

    let response = client.get("/api/unknown").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    let error: StandardErrorResponse = response.into_json().expect("error envelope");
    assert_eq!(error.error_code, "NOT_FOUND");

    let response = client.options("/api/cv/derive").dispatch();
    assert_eq!(response.status(), Status::Ok);
}
