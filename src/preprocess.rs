use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::PredictError;
use crate::model::StudentProfile;

/// Fixed-order numeric representation of a student profile, ready for the
/// linear model. Column order is set at training time and must never change
/// between fit and inference.
pub type FeatureVector = Vec<f64>;

/// Names of the passthrough numeric columns, in design-matrix order. The
/// one-hot blocks for school type and location come before these.
pub const NUMERIC_FEATURES: [&str; 6] = [
    "Hours_Studied",
    "Attendance",
    "Previous_Exam_Level",
    "Parental_Education",
    "Internet_Hours",
    "Sleep_Hours",
];

/// Ordinal encoder for ordered categoricals (parent education). The code is
/// the index into the lexicographically sorted class list captured at fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdinalEncoder {
    pub classes: Vec<String>,
}

impl OrdinalEncoder {
    pub fn fit<S: AsRef<str>>(values: &[S]) -> Self {
        let mut classes: Vec<String> = values.iter().map(|v| v.as_ref().to_string()).collect();
        classes.sort();
        classes.dedup();
        Self { classes }
    }

    /// Fails with an encoding error on any value outside the fitted
    /// vocabulary. There is no "unknown" bucket.
    pub fn encode(&self, field: &'static str, value: &str) -> Result<f64, PredictError> {
        self.classes
            .iter()
            .position(|c| c == value)
            .map(|i| i as f64)
            .ok_or_else(|| PredictError::Encoding {
                field,
                value: value.to_string(),
            })
    }
}

/// One-hot encoder with drop-first expansion: a vocabulary of N categories
/// produces N-1 indicator columns, the first category encoding as all zeros.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneHotEncoder {
    pub categories: Vec<String>,
}

impl OneHotEncoder {
    pub fn fit<S: AsRef<str>>(values: &[S]) -> Self {
        let mut categories: Vec<String> = values.iter().map(|v| v.as_ref().to_string()).collect();
        categories.sort();
        categories.dedup();
        Self { categories }
    }

    /// Number of columns this encoder contributes to the design matrix.
    pub fn width(&self) -> usize {
        self.categories.len().saturating_sub(1)
    }

    pub fn encode(&self, field: &'static str, value: &str) -> Result<Vec<f64>, PredictError> {
        let position =
            self.categories
                .iter()
                .position(|c| c == value)
                .ok_or_else(|| PredictError::Encoding {
                    field,
                    value: value.to_string(),
                })?;
        let mut row = vec![0.0; self.width()];
        if position > 0 {
            row[position - 1] = 1.0;
        }
        Ok(row)
    }
}

/// Standardizes features with the mean/std captured at fit time. Statistics
/// are never recomputed at inference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

impl StandardScaler {
    pub fn fit(design: &Array2<f64>) -> Self {
        let n = design.nrows() as f64;
        let mut mean = Vec::with_capacity(design.ncols());
        let mut std = Vec::with_capacity(design.ncols());
        for column in design.columns() {
            let m = column.sum() / n;
            let var = column.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / n;
            mean.push(m);
            // Constant columns pass through unscaled.
            std.push(if var > 0.0 { var.sqrt() } else { 1.0 });
        }
        Self { mean, std }
    }

    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    pub fn transform(&self, row: &[f64]) -> Result<FeatureVector, PredictError> {
        if row.len() != self.mean.len() {
            return Err(PredictError::ShapeMismatch {
                expected: self.mean.len(),
                actual: row.len(),
            });
        }
        Ok(row
            .iter()
            .zip(self.mean.iter().zip(&self.std))
            .map(|(x, (m, s))| (x - m) / s)
            .collect())
    }

    pub fn transform_matrix(&self, design: &Array2<f64>) -> Result<Array2<f64>, PredictError> {
        if design.ncols() != self.mean.len() {
            return Err(PredictError::ShapeMismatch {
                expected: self.mean.len(),
                actual: design.ncols(),
            });
        }
        let mut scaled = design.clone();
        for (j, mut column) in scaled.columns_mut().into_iter().enumerate() {
            column.mapv_inplace(|x| (x - self.mean[j]) / self.std[j]);
        }
        Ok(scaled)
    }
}

/// The categorical vocabularies learned at training time. Stored alongside
/// the model so inference validates against the exact training vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderSet {
    pub school_type: OneHotEncoder,
    pub location: OneHotEncoder,
    pub parental_education: OrdinalEncoder,
}

impl EncoderSet {
    /// Total design-matrix width: both one-hot blocks plus the passthrough
    /// numeric columns.
    pub fn width(&self) -> usize {
        self.school_type.width() + self.location.width() + NUMERIC_FEATURES.len()
    }

    /// Column names in design-matrix order.
    pub fn feature_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.width());
        for category in self.school_type.categories.iter().skip(1) {
            names.push(format!("School_Type_{category}"));
        }
        for category in self.location.categories.iter().skip(1) {
            names.push(format!("Location_{category}"));
        }
        names.extend(NUMERIC_FEATURES.iter().map(|n| n.to_string()));
        names
    }

    /// Raw (unscaled) design row: one-hot blocks first, passthrough numerics
    /// after, matching the training-time column order.
    #[allow(clippy::too_many_arguments)]
    pub fn encode_values(
        &self,
        school_type: &str,
        location: &str,
        parental_education: &str,
        hours_studied: f64,
        attendance: f64,
        previous_exam_level: f64,
        internet_hours: f64,
        sleep_hours: f64,
    ) -> Result<Vec<f64>, PredictError> {
        let mut row = Vec::with_capacity(self.width());
        row.extend(self.school_type.encode("school_type", school_type)?);
        row.extend(self.location.encode("location", location)?);
        row.push(hours_studied);
        row.push(attendance);
        row.push(previous_exam_level);
        row.push(self.parental_education.encode("parental_education", parental_education)?);
        row.push(internet_hours);
        row.push(sleep_hours);
        Ok(row)
    }

    pub fn encode_row(&self, profile: &StudentProfile) -> Result<Vec<f64>, PredictError> {
        self.encode_values(
            &profile.school_type,
            &profile.location,
            &profile.parental_education,
            profile.hours_studied,
            profile.attendance,
            f64::from(profile.previous_exam_level),
            profile.internet_hours,
            profile.sleep_hours,
        )
    }
}
