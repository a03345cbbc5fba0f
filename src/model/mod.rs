pub mod classifier;
pub mod labels;
pub mod loader;

pub use classifier::{argmax, Classifier, OrtClassifier};
pub use labels::LabelTable;
