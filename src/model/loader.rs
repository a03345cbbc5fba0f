use crate::error::InferenceError;
use ort::session::{builder::GraphOptimizationLevel, Session};
use std::path::Path;
use tracing::info;

// Initialize the global environment for ORT (only needed once)
pub fn init_ort() -> Result<(), InferenceError> {
    ort::init().with_name("oculonnx").commit();
    Ok(())
}

/// Loads the classifier artifact (architecture + weights bundled in one ONNX
/// file) and creates an inference session.
///
/// Trust boundary: the artifact is produced by our own training pipeline and
/// is loaded as-is, with no sandboxing or validation of its contents beyond
/// what the runtime performs. Never point this at a model file received from
/// an untrusted third party.
///
/// Called once at startup; any failure here is fatal and the service must not
/// begin accepting requests.
pub fn load_model(model_path: impl AsRef<Path>) -> Result<Session, InferenceError> {
    let path = model_path.as_ref();
    if !path.exists() {
        return Err(InferenceError::ModelNotFound(path.display().to_string()));
    }

    // Configure Session
    let session = Session::builder()?
        .with_optimization_level(GraphOptimizationLevel::Level3)?
        .with_intra_threads(4)? // Parallelism within an op
        .commit_from_file(path)?;

    info!("Loaded model: {}", path.display());
    // Basic inspection
    for (i, input) in session.inputs().iter().enumerate() {
        info!("  Input {}: {} ({:?})", i, input.name(), input.dtype());
    }

    Ok(session)
}
