use image::{imageops, DynamicImage};
use tract_onnx::prelude::tract_ndarray::Array4;

/// NHWC batch of one: `[1, size, size, 3]`, values in `[0, 1]`.
pub type InputTensor = Array4<f32>;

#[derive(Debug, thiserror::Error)]
pub enum PreprocessError {
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("input size must be positive")]
    ZeroInputSize,
}

pub fn image_to_input_tensor(image: &DynamicImage, size: u32) -> Result<InputTensor, PreprocessError> {
    if size == 0 {
        return Err(PreprocessError::ZeroInputSize);
    }
    if image.width() == 0 || image.height() == 0 {
        return Err(PreprocessError::EmptyImage {
            width: image.width(),
            height: image.height(),
        });
    }

    // Stretch to the square input; the classifier was trained on squashed tiles.
    let rgb = image
        .resize_exact(size, size, imageops::FilterType::Triangle)
        .to_rgb8();

    let side = size as usize;
    let tensor = Array4::from_shape_fn((1, side, side, 3), |(_, y, x, c)| {
        rgb.get_pixel(x as u32, y as u32)[c] as f32 / 255.0
    });

    Ok(tensor)
}
