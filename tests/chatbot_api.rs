use actix_web::{App, test, web};
use chrono::NaiveDate;
use energy_chatbot::domain::category::Category;
use energy_chatbot::domain::department::Department;
use energy_chatbot::domain::record::NewEnergyRecord;
use energy_chatbot::dto::chatbot::{
    ChatbotResponse, NOT_FOUND_MESSAGE, STORE_ERROR_PREFIX, UNRECOGNIZED_MESSAGE,
};
use energy_chatbot::repository::{DieselRepository, EnergyRecordWriter};
use energy_chatbot::routes;
use serde_json::json;

mod common;

fn seed_mech_reading(repo: &DieselRepository) {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(9, 15, 0)
        .unwrap();
    repo.create_record(
        Category::SolarPower,
        &NewEnergyRecord::new(date, 100).with_department(Department::Mech, 100.0),
    )
    .expect("should insert record");
}

async fn ask(repo: DieselRepository, body: serde_json::Value) -> ChatbotResponse {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/chatbot")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    test::read_body_json(resp).await
}

#[actix_web::test]
async fn matching_record_is_returned() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    seed_mech_reading(&repo);

    let reply = ask(
        repo,
        json!({"query": "solar data for mech on 01.01.2024 total of 100"}),
    )
    .await;

    let record: serde_json::Value =
        serde_json::from_str(&reply.response).expect("response should carry the record");
    assert_eq!(record["Mech"], 100.0);
    assert_eq!(record["Total"], 100);
    assert_eq!(record["Date"], "2024-01-01T09:15:00");
}

#[actix_web::test]
async fn no_match_reports_no_data() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    seed_mech_reading(&repo);

    let reply = ask(
        repo,
        json!({"query": "solar data for mech on 02.01.2024 total of 100"}),
    )
    .await;

    assert_eq!(reply.response, NOT_FOUND_MESSAGE);
}

#[actix_web::test]
async fn unrelated_question_gets_guidance() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let reply = ask(repo, json!({"query": "weather today"})).await;

    assert_eq!(reply.response, UNRECOGNIZED_MESSAGE);
}

#[actix_web::test]
async fn missing_query_field_is_treated_as_empty() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let reply = ask(repo, json!({})).await;

    assert_eq!(reply.response, UNRECOGNIZED_MESSAGE);
}

#[actix_web::test]
async fn store_failure_is_reported_in_band() {
    let test_db = common::TestDb::unmigrated();
    let repo = DieselRepository::new(test_db.pool());

    let reply = ask(repo, json!({"query": "electricity usage"})).await;

    assert!(reply.response.starts_with(STORE_ERROR_PREFIX));
    assert!(reply.response.contains("electricity_data"));
}
