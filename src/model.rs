use serde::{Deserialize, Serialize};

use crate::analytics::{self, FactorBreakdown};
use crate::artifacts::ModelArtifacts;
use crate::error::PredictError;
use crate::recommend::{self, Insight};

/// One student submission from the dashboard form. Created per request and
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub grade_level: u8,
    pub parental_education: String,
    pub hours_studied: f64,
    pub attendance: f64,
    pub previous_exam_level: u8,
    pub school_type: String,
    pub location: String,
    pub internet_hours: f64,
    pub sleep_hours: f64,
    pub activity_count: u8,
}

impl StudentProfile {
    /// Per-field range validation. Categorical vocabulary is checked later by
    /// the encoders, against the training-time artifact.
    pub fn validate(&self) -> Result<(), PredictError> {
        check_range("grade_level", f64::from(self.grade_level), 6.0, 12.0)?;
        check_range("hours_studied", self.hours_studied, 0.0, 8.0)?;
        check_range("attendance", self.attendance, 0.0, 100.0)?;
        check_range(
            "previous_exam_level",
            f64::from(self.previous_exam_level),
            1.0,
            10.0,
        )?;
        check_range("internet_hours", self.internet_hours, 0.0, 10.0)?;
        check_range("sleep_hours", self.sleep_hours, 6.0, 12.0)?;
        check_range("activity_count", f64::from(self.activity_count), 0.0, 10.0)?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), PredictError> {
    // NaN fails the contains check, so it is rejected along with
    // out-of-range values.
    if !(min..=max).contains(&value) {
        return Err(PredictError::Validation {
            field,
            message: format!("must be between {min} and {max}, got {value}"),
        });
    }
    Ok(())
}

/// Fixed linear combination learned at training time. No retraining, no
/// online update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub feature_names: Vec<String>,
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    /// `w . x + b` over a feature vector of the expected length. A length
    /// mismatch is an error, never a silently wrong score.
    pub fn predict_score(&self, features: &[f64]) -> Result<f64, PredictError> {
        if features.len() != self.weights.len() {
            return Err(PredictError::ShapeMismatch {
                expected: self.weights.len(),
                actual: features.len(),
            });
        }
        let dot: f64 = self.weights.iter().zip(features).map(|(w, x)| w * x).sum();
        Ok(dot + self.intercept)
    }
}

/// Qualitative performance band. Variants are ordered worst to best so
/// banding monotonicity can be stated as a plain comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PerformanceLevel {
    NeedsImprovement,
    Good,
    Excellent,
    Outstanding,
}

impl PerformanceLevel {
    /// Static thresholds; ties at a boundary land in the higher band.
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            PerformanceLevel::Outstanding
        } else if score >= 75.0 {
            PerformanceLevel::Excellent
        } else if score >= 65.0 {
            PerformanceLevel::Good
        } else {
            PerformanceLevel::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceLevel::Outstanding => "Outstanding",
            PerformanceLevel::Excellent => "Excellent",
            PerformanceLevel::Good => "Good",
            PerformanceLevel::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// What the dashboard renders: the raw score, its band, the canned insight
/// for that band, and the per-factor chart payload.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResult {
    pub score: f64,
    pub level: PerformanceLevel,
    pub level_label: &'static str,
    pub insight: Insight,
    pub factors: FactorBreakdown,
}

/// Full pipeline: validate -> encode -> scale -> linear score -> band.
/// Pure and deterministic; identical input yields identical output.
pub fn predict(
    artifacts: &ModelArtifacts,
    profile: &StudentProfile,
) -> Result<PredictionResult, PredictError> {
    profile.validate()?;
    let raw = artifacts.encoders.encode_row(profile)?;
    let features = artifacts.scaler.transform(&raw)?;
    let score = artifacts.model.predict_score(&features)?;
    let level = PerformanceLevel::from_score(score);
    Ok(PredictionResult {
        score,
        level,
        level_label: level.label(),
        insight: recommend::insight_for(level, profile.grade_level),
        factors: analytics::factor_breakdown(profile, score),
    })
}
