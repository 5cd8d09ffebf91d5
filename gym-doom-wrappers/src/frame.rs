//! Conversion of rendered frames into observations.
use anyhow::Result;
use gym_doom_core::Array;
use image::RgbImage;
use ndarray::Array3;

/// Converts an RGB frame into a `u8` array of shape `(height, width, 3)`.
pub fn rgb_image_to_array(img: &RgbImage) -> Result<Array> {
    let (w, h) = img.dimensions();
    let a = Array3::from_shape_vec((h as usize, w as usize, 3), img.as_raw().clone())?;
    Ok(Array::U8(a.into_dyn()))
}
