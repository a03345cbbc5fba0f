use axum::{
    extract::{Multipart, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::error::InferenceError;
use crate::model::argmax;
use crate::server::types::*;

pub const WELCOME_MESSAGE: &str = "Welcome to the Eye Disease Classification API!";

/// Multipart field name carrying the uploaded image.
const UPLOAD_FIELD: &str = "file";

pub async fn read_root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

pub async fn predict(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<PredictResponse>, InferenceError> {
    // 1. Pull the uploaded file out of the multipart body
    let mut image_bytes = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| InferenceError::UploadError(e.to_string()))?
    {
        if field.name() == Some(UPLOAD_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| InferenceError::UploadError(e.to_string()))?;
            image_bytes = Some(bytes);
            break;
        }
    }
    let image_bytes = image_bytes.ok_or_else(|| {
        InferenceError::UploadError(format!("missing `{}` field in multipart upload", UPLOAD_FIELD))
    })?;

    // 2. Decode + resize + tensorize
    let input_tensor = crate::preprocessing::image::process_bytes(&image_bytes)?;

    // 3. Forward pass (synchronous, CPU-bound; serialized by the mutex)
    let scores = {
        let mut classifier = state.classifier.lock().unwrap();
        classifier.scores(input_tensor)?
    };
    debug!("Model output shape: [1, {}]", scores.len());

    // 4. Argmax + label lookup
    let predicted_class_id = argmax(&scores).ok_or_else(|| {
        InferenceError::ModelInterface("model produced an empty score vector".to_string())
    })?;
    let predicted_class_label = state.labels.label_for(predicted_class_id).to_string();

    Ok(Json(PredictResponse {
        predicted_class_id,
        predicted_class_label,
    }))
}
