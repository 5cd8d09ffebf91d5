//! Observation wrappers.
mod crop;
mod dict;
mod flatten_scale;
mod flatten_scale_swap_axis;
pub use crop::{CropObservation, CropObservationConfig};
pub use dict::{DictObservation, DictObservationConfig, IMAGE_KEY, STATE_KEY};
pub use flatten_scale::{FlattenScaleObservation, FlattenScaleObservationConfig};
pub use flatten_scale_swap_axis::{
    FlattenScaleSwapAxisObservation, FlattenScaleSwapAxisObservationConfig,
};
