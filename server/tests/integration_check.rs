use axum::body::{Body, Bytes};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use checker::config::CheckerConfig;
use checker::SymptomChecker;
use http_body_util::BodyExt;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;
use tower::ServiceExt;

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Bytes) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, body)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_form(app: Router, form: &str) -> (StatusCode, Bytes) {
    let req = Request::post("/analyze")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    send(app, req).await
}

fn builtin_app() -> Router {
    server::router(SymptomChecker::builtin().unwrap())
}

#[tokio::test]
async fn check_api_ranks_results() {
    let checker = SymptomChecker::builtin().unwrap();
    let fever = checker.encoding().prime_of("Fever").unwrap();
    let headache = checker.encoding().prime_of("Headache").unwrap();
    let app = server::router(checker);

    let (status, body) = get(app, &format!("/api/check?symptoms={fever},{headache},zzz")).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "matched");
    let names: Vec<&str> = json["results"].as_array().unwrap().iter().map(|r| r["name"].as_str().unwrap()).collect();
    // three diseases share both symptoms; ties go alphabetically
    assert_eq!(names, ["Gastroenteritis (Stomach Flu)", "Influenza", "Strep Throat"]);
    assert_eq!(json["results"][0]["count"], 2);
    assert_eq!(json["warnings"][0], "'zzz' (Not an integer)");
}

#[tokio::test]
async fn form_page_and_results_page() {
    let (status, body) = get(builtin_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("name=\"symptoms\""));

    let (status, body) = post_form(builtin_app(), "symptoms=2&symptoms=3").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("<li>Abdominal pain</li>"));
    assert!(html.contains("<li>Anxiety</li>"));
    assert!(html.contains("Gastroenteritis (Stomach Flu)"));
    assert!(html.contains("<svg"));
}

#[tokio::test]
async fn empty_form_is_rejected() {
    let (status, body) = post_form(builtin_app(), "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Please select at least one symptom");
}

#[tokio::test]
async fn graph_endpoint() {
    let (status, body) = get(builtin_app(), "/graph.svg?symptoms=2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body.to_vec()).unwrap().starts_with("<svg"));

    let (status, _) = get(builtin_app(), "/graph.svg?symptoms=4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn custom_table_from_files() {
    let dir = tempdir().unwrap();
    let table = dir.path().join("table.json");
    let plans = dir.path().join("plans.json");
    fs::write(
        &table,
        r#"{"symptoms":["Cough","Fever","Sore throat"],
            "matrix":[{"name":"Common Cold","presence":[1,0,1]},
                      {"name":"Influenza","presence":[1,1,1]}]}"#,
    )
    .unwrap();
    fs::write(&plans, r#"{"Default":"See a doctor."}"#).unwrap();

    let app = server::build_app(&CheckerConfig::new(Some(table), Some(plans))).unwrap();
    let (_, body) = get(app.clone(), "/api/legend").await;
    let legend: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(legend["disease_to_sqf"]["Common Cold"], 10);
    assert_eq!(legend["disease_to_sqf"]["Influenza"], 30);

    let (_, body) = get(app, "/api/check?symptoms=2,3").await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["results"][0]["name"], "Influenza");
    assert_eq!(json["results"][1]["name"], "Common Cold");
    assert_eq!(json["results"][1]["action"], "See a doctor.");
}

#[tokio::test]
async fn missing_default_plan_fails_startup() {
    let dir = tempdir().unwrap();
    let plans = dir.path().join("plans.json");
    fs::write(&plans, r#"{"Influenza":"Rest."}"#).unwrap();
    assert!(server::build_app(&CheckerConfig::new(None, Some(plans))).is_err());
}

#[tokio::test]
async fn object_table_with_case_insensitive_order() {
    let dir = tempdir().unwrap();
    let table = dir.path().join("table.json");
    fs::write(&table, r#"{"diseases":{"Zeta":["apple","Banana"],"Alpha":["Banana"]}}"#).unwrap();

    let config = CheckerConfig::new(Some(table), None).with_order("case-insensitive".parse().unwrap());
    let app = server::build_app(&config).unwrap();
    let (status, body) = get(app, "/api/legend").await;
    assert_eq!(status, StatusCode::OK);
    let legend: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(legend["order"], "case_insensitive_name");
    assert_eq!(legend["symptom_to_prime"]["apple"], 2);
    assert_eq!(legend["symptom_to_prime"]["Banana"], 3);
    assert_eq!(legend["sqf_to_diseases"]["3"], serde_json::json!(["Alpha"]));
}
