use crate::model::{Classifier, LabelTable};
use serde::Serialize;
use std::sync::Mutex;

/// Shared application state: built once in `main`, never mutated afterwards.
/// The session needs `&mut` to run, so the classifier sits behind a mutex;
/// inference is serialized across concurrent requests, matching the
/// single-worker model this service was designed around.
pub struct AppState {
    pub classifier: Mutex<Box<dyn Classifier>>,
    pub labels: LabelTable,
}

impl AppState {
    pub fn new(classifier: impl Classifier + 'static) -> Self {
        Self {
            classifier: Mutex::new(Box::new(classifier)),
            labels: LabelTable::default(),
        }
    }
}

// --- DTOs (Data Transfer Objects) ---

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct PredictResponse {
    pub predicted_class_id: usize,
    pub predicted_class_label: String,
}
