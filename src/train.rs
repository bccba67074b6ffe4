use linfa::prelude::*;
use linfa_linear::LinearRegression;
use ndarray::{Array1, Array2};
use thiserror::Error;

use crate::artifacts::ModelArtifacts;
use crate::data::TrainingRecord;
use crate::error::PredictError;
use crate::model::LinearModel;
use crate::preprocess::{EncoderSet, OneHotEncoder, OrdinalEncoder, StandardScaler};

#[derive(Debug, Error)]
pub enum TrainError {
    #[error("dataset error: {0}")]
    Dataset(String),

    #[error(transparent)]
    Encoding(#[from] PredictError),

    #[error("model fitting failed: {0}")]
    Fit(String),
}

#[derive(Debug, Clone)]
pub struct TrainReport {
    pub n_train: usize,
    pub n_test: usize,
    pub train_mse: f64,
    pub test_mse: f64,
    pub test_r2: f64,
}

/// Fit the three artifacts on a labeled dataset: encoders from the observed
/// vocabulary, scaler on the transformed design matrix, linear regression on
/// the scaled matrix. Training and inference apply the identical transform
/// chain, so the shipped weights are in scaled feature space.
pub fn fit_artifacts(
    records: &[TrainingRecord],
    test_ratio: f64,
) -> Result<(ModelArtifacts, TrainReport), TrainError> {
    if records.len() < 10 {
        return Err(TrainError::Dataset(format!(
            "need at least 10 records to fit, got {}",
            records.len()
        )));
    }

    let encoders = fit_encoders(records)?;
    let width = encoders.width();

    let mut flat = Vec::with_capacity(records.len() * width);
    let mut targets = Vec::with_capacity(records.len());
    for record in records {
        flat.extend(encoders.encode_values(
            &record.school_type,
            &record.location,
            &record.parental_education,
            record.hours_studied,
            record.attendance,
            record.previous_exam_level,
            record.internet_hours,
            record.sleep_hours,
        )?);
        targets.push(record.score);
    }
    let design = Array2::from_shape_vec((records.len(), width), flat)
        .map_err(|e| TrainError::Dataset(e.to_string()))?;

    let scaler = StandardScaler::fit(&design);
    let scaled = scaler.transform_matrix(&design)?;

    // Deterministic interleaved hold-out split.
    let stride = ((1.0 / test_ratio).round() as usize).max(2);
    let test_idx: Vec<usize> = (0..records.len()).filter(|i| i % stride == 0).collect();
    let train_idx: Vec<usize> = (0..records.len()).filter(|i| i % stride != 0).collect();

    let x_train = select_rows(&scaled, &train_idx);
    let y_train = Array1::from_iter(train_idx.iter().map(|&i| targets[i]));

    let dataset = Dataset::new(x_train, y_train);
    let fitted = LinearRegression::new()
        .fit(&dataset)
        .map_err(|e| TrainError::Fit(e.to_string()))?;

    let model = LinearModel {
        feature_names: encoders.feature_names(),
        weights: fitted.params().to_vec(),
        intercept: fitted.intercept(),
    };

    let predict_rows = |idx: &[usize]| -> Result<Vec<f64>, PredictError> {
        idx.iter()
            .map(|&i| model.predict_score(&scaled.row(i).to_vec()))
            .collect()
    };
    let train_pred = predict_rows(&train_idx)?;
    let test_pred = predict_rows(&test_idx)?;
    let train_targets: Vec<f64> = train_idx.iter().map(|&i| targets[i]).collect();
    let test_targets: Vec<f64> = test_idx.iter().map(|&i| targets[i]).collect();

    let report = TrainReport {
        n_train: train_idx.len(),
        n_test: test_idx.len(),
        train_mse: mean_squared_error(&train_pred, &train_targets),
        test_mse: mean_squared_error(&test_pred, &test_targets),
        test_r2: r2_score(&test_pred, &test_targets),
    };

    let artifacts = ModelArtifacts {
        encoders,
        scaler,
        model,
    };
    Ok((artifacts, report))
}

fn fit_encoders(records: &[TrainingRecord]) -> Result<EncoderSet, TrainError> {
    let school_types: Vec<&str> = records.iter().map(|r| r.school_type.as_str()).collect();
    let locations: Vec<&str> = records.iter().map(|r| r.location.as_str()).collect();
    let educations: Vec<&str> = records
        .iter()
        .map(|r| r.parental_education.as_str())
        .collect();

    let encoders = EncoderSet {
        school_type: OneHotEncoder::fit(&school_types),
        location: OneHotEncoder::fit(&locations),
        parental_education: OrdinalEncoder::fit(&educations),
    };

    if encoders.school_type.categories.len() < 2 {
        return Err(TrainError::Dataset(
            "School_Type needs at least two distinct values".to_string(),
        ));
    }
    if encoders.location.categories.len() < 2 {
        return Err(TrainError::Dataset(
            "Location needs at least two distinct values".to_string(),
        ));
    }
    Ok(encoders)
}

fn select_rows(matrix: &Array2<f64>, idx: &[usize]) -> Array2<f64> {
    let mut out = Array2::zeros((idx.len(), matrix.ncols()));
    for (k, &i) in idx.iter().enumerate() {
        out.row_mut(k).assign(&matrix.row(i));
    }
    out
}

pub fn mean_squared_error(predictions: &[f64], targets: &[f64]) -> f64 {
    if targets.is_empty() {
        return 0.0;
    }
    predictions
        .iter()
        .zip(targets)
        .map(|(p, t)| (p - t) * (p - t))
        .sum::<f64>()
        / targets.len() as f64
}

pub fn r2_score(predictions: &[f64], targets: &[f64]) -> f64 {
    if targets.is_empty() {
        return 0.0;
    }
    let mean = targets.iter().sum::<f64>() / targets.len() as f64;
    let ss_tot: f64 = targets.iter().map(|t| (t - mean) * (t - mean)).sum();
    if ss_tot == 0.0 {
        return 0.0;
    }
    let ss_res: f64 = predictions
        .iter()
        .zip(targets)
        .map(|(p, t)| (p - t) * (p - t))
        .sum();
    1.0 - ss_res / ss_tot
}
