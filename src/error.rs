use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ndarray::ShapeError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Model not found at path: {0}")]
    ModelNotFound(String),

    #[error("ONNX Runtime error: {0}")]
    OrtError(#[from] ort::Error),

    #[error("Image processing error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Upload error: {0}")]
    UploadError(String),

    #[error("Preprocessing error: {0}")]
    PreprocessingError(String),

    #[error("Unsupported model interface: {0}")]
    ModelInterface(String),

    #[error("Shape error: {0}")]
    ShapeError(#[from] ShapeError),
}

impl From<ort::Error<ort::session::builder::SessionBuilder>> for InferenceError {
    fn from(err: ort::Error<ort::session::builder::SessionBuilder>) -> Self {
        InferenceError::OrtError(err.into())
    }
}

impl IntoResponse for InferenceError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            InferenceError::ModelNotFound(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            InferenceError::ImageError(_) => {
                (StatusCode::BAD_REQUEST, "Invalid image data".to_string())
            }
            InferenceError::UploadError(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            InferenceError::PreprocessingError(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            InferenceError::ModelInterface(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            InferenceError::ShapeError(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
