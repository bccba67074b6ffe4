use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ArtifactError;
use crate::model::LinearModel;
use crate::preprocess::{EncoderSet, StandardScaler};

pub const ENCODERS_FILE: &str = "encoders.json";
pub const SCALER_FILE: &str = "scaler.json";
pub const MODEL_FILE: &str = "model.json";

/// The three trained objects the pipeline consumes: categorical encoders,
/// feature scaler, and linear model. Loaded once at process start and treated
/// as immutable for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifacts {
    pub encoders: EncoderSet,
    pub scaler: StandardScaler,
    pub model: LinearModel,
}

impl ModelArtifacts {
    pub fn load(dir: &Path) -> Result<Self, ArtifactError> {
        let artifacts = Self {
            encoders: read_json(&dir.join(ENCODERS_FILE))?,
            scaler: read_json(&dir.join(SCALER_FILE))?,
            model: read_json(&dir.join(MODEL_FILE))?,
        };
        artifacts.validate()?;
        Ok(artifacts)
    }

    pub fn save(&self, dir: &Path) -> Result<(), ArtifactError> {
        self.validate()?;
        fs::create_dir_all(dir).map_err(|source| ArtifactError::Io {
            path: dir.display().to_string(),
            source,
        })?;
        write_json(&dir.join(ENCODERS_FILE), &self.encoders)?;
        write_json(&dir.join(SCALER_FILE), &self.scaler)?;
        write_json(&dir.join(MODEL_FILE), &self.model)?;
        Ok(())
    }

    /// Structural compatibility between the three artifacts: same feature
    /// count, same column order.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        let width = self.encoders.width();
        if self.scaler.len() != width {
            return Err(ArtifactError::Inconsistent(format!(
                "scaler covers {} features, encoders produce {width}",
                self.scaler.len()
            )));
        }
        if self.scaler.std.len() != self.scaler.mean.len() {
            return Err(ArtifactError::Inconsistent(format!(
                "scaler has {} means but {} stds",
                self.scaler.mean.len(),
                self.scaler.std.len()
            )));
        }
        if self.model.weights.len() != width {
            return Err(ArtifactError::Inconsistent(format!(
                "model has {} weights, encoders produce {width} features",
                self.model.weights.len()
            )));
        }
        let expected_names = self.encoders.feature_names();
        if self.model.feature_names != expected_names {
            return Err(ArtifactError::Inconsistent(format!(
                "model feature order {:?} does not match encoder order {:?}",
                self.model.feature_names, expected_names
            )));
        }
        Ok(())
    }

    pub fn n_features(&self) -> usize {
        self.model.weights.len()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let contents = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ArtifactError::Parse {
        path: path.display().to_string(),
        source,
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ArtifactError> {
    let contents = serde_json::to_string_pretty(value).map_err(|source| ArtifactError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    fs::write(path, contents).map_err(|source| ArtifactError::Io {
        path: path.display().to_string(),
        source,
    })
}
