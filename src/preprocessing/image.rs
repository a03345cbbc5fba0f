use crate::error::InferenceError;
use image::imageops::FilterType;
use ndarray::{Array, Array4, Axis};

pub const INPUT_WIDTH: u32 = 224;
pub const INPUT_HEIGHT: u32 = 224;

/// Preprocesses an uploaded image from raw bytes into the model's input
/// tensor, shape [1, 3, 224, 224].
///
/// The resize stretches each axis independently (no aspect-ratio
/// preservation, no cropping) and pixels are scaled to [0, 1] by dividing by
/// 255. The model was trained on inputs prepared exactly this way, so no
/// mean/std normalization is applied here.
pub fn process_bytes(buffer: &[u8]) -> Result<Array4<f32>, InferenceError> {
    // 1. Decode from bytes (guess format); to_rgb8 below drops any alpha
    let img = image::load_from_memory(buffer).map_err(InferenceError::ImageError)?;

    // 2. Stretch to 224x224
    let resized = img.resize_exact(INPUT_WIDTH, INPUT_HEIGHT, FilterType::Triangle);

    // 3. Scale to [0, 1]
    let mut scaled_data = Vec::with_capacity(3 * (INPUT_WIDTH * INPUT_HEIGHT) as usize);

    for pixel in resized.to_rgb8().pixels() {
        let (r, g, b) = (pixel[0], pixel[1], pixel[2]);

        scaled_data.push(r as f32 / 255.0);
        scaled_data.push(g as f32 / 255.0);
        scaled_data.push(b as f32 / 255.0);
    }

    // Currently data is [R, G, B, R, G, B...] which is [Height, Width, Channels] format
    let array = Array::from_shape_vec(
        (INPUT_HEIGHT as usize, INPUT_WIDTH as usize, 3),
        scaled_data,
    )
    .map_err(|e| InferenceError::PreprocessingError(e.to_string()))?;

    // Permute to [Channels, Height, Width] -> (2, 0, 1)
    let array = array.permuted_axes([2, 0, 1]);

    // Add batch dimension [1, 3, 224, 224]
    let array = array.insert_axis(Axis(0));

    // Ensure standard layout (contiguous)
    Ok(array.as_standard_layout().to_owned())
}
