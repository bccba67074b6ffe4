use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::json;

use student_dashboard::artifacts::ModelArtifacts;
use student_dashboard::model::{LinearModel, StudentProfile};
use student_dashboard::preprocess::{EncoderSet, OneHotEncoder, OrdinalEncoder, StandardScaler};
use student_dashboard::server;

fn artifacts() -> ModelArtifacts {
    let encoders = EncoderSet {
        school_type: OneHotEncoder::fit(&["Public School", "Private School"]),
        location: OneHotEncoder::fit(&["Urban", "Rural"]),
        parental_education: OrdinalEncoder::fit(&["High School", "Bachelor", "Master", "PhD"]),
    };
    let width = encoders.width();
    let feature_names = encoders.feature_names();
    ModelArtifacts {
        encoders,
        scaler: StandardScaler {
            mean: vec![0.0; width],
            std: vec![1.0; width],
        },
        model: LinearModel {
            feature_names,
            weights: vec![0.0, 0.0, 6.0, 0.3, 2.0, 1.0, -0.5, 1.0],
            intercept: 12.0,
        },
    }
}

fn profile() -> StudentProfile {
    StudentProfile {
        grade_level: 10,
        parental_education: "Bachelor".to_string(),
        hours_studied: 3.0,
        attendance: 85.0,
        previous_exam_level: 6,
        school_type: "Public School".to_string(),
        location: "Urban".to_string(),
        internet_hours: 3.0,
        sleep_hours: 8.0,
        activity_count: 1,
    }
}

macro_rules! dashboard_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(artifacts()))
                .configure(server::routes),
        )
        .await
    };
}

#[actix_web::test]
async fn predict_endpoint_returns_a_prediction() {
    let app = dashboard_app!();
    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(profile())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["score"].is_f64());
    assert!(body["level_label"].is_string());
    assert!(body["insight"]["tips"].is_array());
    assert!(body["factors"]["factors"].is_array());
}

#[actix_web::test]
async fn out_of_range_submission_is_a_422_with_the_field() {
    let app = dashboard_app!();
    let mut bad = profile();
    bad.attendance = 150.0;
    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(bad)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["field"], json!("attendance"));
    assert!(body["error"].as_str().unwrap().contains("attendance"));
}

#[actix_web::test]
async fn unknown_category_is_a_422_not_a_silent_default() {
    let app = dashboard_app!();
    let mut bad = profile();
    bad.school_type = "Homeschool".to_string();
    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(bad)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["field"], json!("school_type"));
}

#[actix_web::test]
async fn model_info_exposes_the_training_vocabulary() {
    let app = dashboard_app!();
    let req = test::TestRequest::get().uri("/model/info").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["algorithm"], json!("Linear Regression"));
    assert_eq!(body["n_features"], json!(8));
    assert_eq!(
        body["school_types"],
        json!(["Private School", "Public School"])
    );
    assert_eq!(
        body["parental_education_levels"],
        json!(["Bachelor", "High School", "Master", "PhD"])
    );
}

#[actix_web::test]
async fn health_and_homepage_respond() {
    let app = dashboard_app!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert!(std::str::from_utf8(&body).unwrap().contains("Performance Dashboard"));
}

#[actix_web::test]
async fn tips_endpoint_returns_the_static_list() {
    let app = dashboard_app!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/tips").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body.as_array().unwrap().len() >= 5);
}
