use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Request-time prediction failures. Validation and encoding errors carry the
/// offending field so the form can highlight it.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("{field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("{field}: unknown value '{value}'")]
    Encoding { field: &'static str, value: String },

    #[error("feature vector has {actual} values, model expects {expected}")]
    ShapeMismatch { expected: usize, actual: usize },
}

impl PredictError {
    pub fn field(&self) -> Option<&'static str> {
        match self {
            PredictError::Validation { field, .. } | PredictError::Encoding { field, .. } => {
                Some(field)
            }
            PredictError::ShapeMismatch { .. } => None,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    field: Option<&'static str>,
}

impl ResponseError for PredictError {
    fn status_code(&self) -> StatusCode {
        match self {
            PredictError::Validation { .. } | PredictError::Encoding { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            // A shape mismatch means the loaded artifacts disagree with the
            // preprocessor, not that the submission was bad.
            PredictError::ShapeMismatch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
            field: self.field(),
        })
    }
}

/// Artifact loading failures. Fatal at startup, never produced per-request.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("inconsistent artifacts: {0}")]
    Inconsistent(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_and_encoding_errors_carry_their_field() {
        let err = PredictError::Validation {
            field: "attendance",
            message: "must be between 0 and 100".to_string(),
        };
        assert_eq!(err.field(), Some("attendance"));

        let err = PredictError::Encoding {
            field: "school_type",
            value: "Unknown".to_string(),
        };
        assert_eq!(err.field(), Some("school_type"));
        assert_eq!(err.to_string(), "school_type: unknown value 'Unknown'");
    }

    #[test]
    fn shape_mismatch_is_an_internal_error() {
        let err = PredictError::ShapeMismatch {
            expected: 10,
            actual: 7,
        };
        assert_eq!(err.field(), None);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
