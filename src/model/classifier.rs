use crate::error::InferenceError;
use ndarray::{Array4, Axis};
use ort::session::Session;
use ort::value::Value;

/// Narrow capability interface over the inference engine: one fixed-shape
/// image tensor in, one raw score per class out (no softmax). The concrete
/// engine is swappable behind this; handler tests use a canned
/// implementation.
///
/// Inference mutates internal session state, hence `&mut self`; the caller
/// serializes access (the handler holds the classifier behind a mutex).
pub trait Classifier: Send {
    fn scores(&mut self, input: Array4<f32>) -> Result<Vec<f32>, InferenceError>;
}

/// The production classifier: a loaded ONNX session run on the CPU.
pub struct OrtClassifier {
    session: Session,
    input_name: String,
}

impl OrtClassifier {
    pub fn new(session: Session) -> Result<Self, InferenceError> {
        // Both checks run once, before any request; `scores` relies on the
        // first output existing
        if session.outputs().is_empty() {
            return Err(InferenceError::ModelInterface(
                "model declares no outputs".to_string(),
            ));
        }
        let input_name = session
            .inputs()
            .first()
            .map(|input| input.name().to_string())
            .ok_or_else(|| {
                InferenceError::ModelInterface("model declares no inputs".to_string())
            })?;
        Ok(Self {
            session,
            input_name,
        })
    }
}

impl Classifier for OrtClassifier {
    fn scores(&mut self, input: Array4<f32>) -> Result<Vec<f32>, InferenceError> {
        let shape = input.shape().to_vec();
        let data = input.into_raw_vec().into_boxed_slice();
        let input_value = Value::from_array((shape, data))?;
        let outputs = self
            .session
            .run(ort::inputs![self.input_name.clone() => input_value])?;

        let (shape, data) = outputs[0].try_extract_tensor::<f32>()?;
        let dims: Vec<usize> = shape.iter().map(|&x| x as usize).collect();
        let output = ndarray::ArrayViewD::from_shape(dims.as_slice(), data)?;
        // Drop the batch dimension: scores for the single submitted image
        let scores = output.index_axis(Axis(0), 0);

        Ok(scores.iter().copied().collect())
    }
}

/// Index of the largest score; ties resolve to the lowest index. `None` only
/// for an empty score vector.
pub fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &score) in scores.iter().enumerate() {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((i, score)),
        }
    }
    best.map(|(i, _)| i)
}
