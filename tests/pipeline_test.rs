use std::path::Path;

use student_dashboard::artifacts::ModelArtifacts;
use student_dashboard::error::PredictError;
use student_dashboard::model::{predict, LinearModel, PerformanceLevel, StudentProfile};
use student_dashboard::preprocess::{EncoderSet, OneHotEncoder, OrdinalEncoder, StandardScaler};

/// Hand-built artifacts with an identity scaler, so expected scores can be
/// computed on paper.
fn fixture_artifacts() -> ModelArtifacts {
    let encoders = EncoderSet {
        school_type: OneHotEncoder::fit(&["Public School", "Private School", "Charter School"]),
        location: OneHotEncoder::fit(&["Urban", "Suburban", "Rural"]),
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
            // One-hot blocks contribute nothing; score is driven by the
            // numeric passthrough columns.
            weights: vec![0.0, 0.0, 0.0, 0.0, 5.0, 0.3, 2.0, 1.0, -0.5, 1.0],
            intercept: 10.0,
        },
    }
}

fn profile() -> StudentProfile {
    StudentProfile {
        grade_level: 9,
        parental_education: "Master".to_string(),
        hours_studied: 4.0,
        attendance: 90.0,
        previous_exam_level: 7,
        school_type: "Public School".to_string(),
        location: "Urban".to_string(),
        internet_hours: 2.0,
        sleep_hours: 8.0,
        activity_count: 3,
    }
}

#[test]
fn predict_computes_the_linear_score_end_to_end() {
    let artifacts = fixture_artifacts();
    let result = predict(&artifacts, &profile()).unwrap();
    // 10 + 5*4 + 0.3*90 + 2*7 + 1*2 (Master) - 0.5*2 + 1*8 = 80.0
    assert!((result.score - 80.0).abs() < 1e-6);
    assert_eq!(result.level, PerformanceLevel::Excellent);
    assert_eq!(result.level_label, "Excellent");
    assert!(!result.insight.tips.is_empty());
    assert!(!result.factors.factors.is_empty());
}

#[test]
fn predict_is_deterministic_across_repeated_calls() {
    let artifacts = fixture_artifacts();
    let p = profile();
    let first = predict(&artifacts, &p).unwrap();
    for _ in 0..10 {
        let again = predict(&artifacts, &p).unwrap();
        assert_eq!(again.score, first.score);
        assert_eq!(again.level, first.level);
    }
}

#[test]
fn unknown_school_type_is_rejected_as_an_encoding_error() {
    let artifacts = fixture_artifacts();
    let mut p = profile();
    p.school_type = "Unknown".to_string();
    let err = predict(&artifacts, &p).unwrap_err();
    match err {
        PredictError::Encoding { field, value } => {
            assert_eq!(field, "school_type");
            assert_eq!(value, "Unknown");
        }
        other => panic!("expected encoding error, got {other:?}"),
    }
}

#[test]
fn out_of_range_input_is_rejected_before_encoding() {
    let artifacts = fixture_artifacts();
    let mut p = profile();
    p.attendance = 150.0;
    let err = predict(&artifacts, &p).unwrap_err();
    assert_eq!(err.field(), Some("attendance"));
}

#[test]
fn model_with_wrong_width_fails_shape_check_not_silently() {
    let mut artifacts = fixture_artifacts();
    artifacts.model.weights.truncate(7);
    let err = predict(&artifacts, &profile()).unwrap_err();
    assert!(matches!(err, PredictError::ShapeMismatch { .. }));
}

#[test]
fn committed_artifacts_load_and_predict() {
    let artifacts = ModelArtifacts::load(Path::new("model")).unwrap();
    let mut p = profile();
    p.school_type = artifacts.encoders.school_type.categories[0].clone();
    p.location = artifacts.encoders.location.categories[0].clone();
    p.parental_education = artifacts.encoders.parental_education.classes[0].clone();

    let result = predict(&artifacts, &p).unwrap();
    assert!(result.score.is_finite());
    assert_eq!(result.level, PerformanceLevel::from_score(result.score));

    // More study and a better report card never lower the band on this model.
    let mut better = p.clone();
    better.hours_studied = 8.0;
    better.previous_exam_level = 10;
    better.attendance = 100.0;
    let improved = predict(&artifacts, &better).unwrap();
    assert!(improved.level >= result.level);
}
