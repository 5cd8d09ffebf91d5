//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum GymDoomError {
    /// The target resolution is not in the list of supported resolutions.
    #[error("The specified resolution \"{0}\" is not supported by Vizdoom")]
    UnsupportedResolution(String),

    /// The backend has no resolution handle for a supported resolution.
    #[error("The backend has no screen resolution RES_{width}X{height}")]
    MissingBackendResolution {
        /// Screen width.
        width: u32,
        /// Screen height.
        height: u32,
    },

    /// The Doom backend is not available.
    #[error("{0} (hint: the Doom backend library must be installed and linked to use this environment)")]
    MissingBackendDependency(String),

    /// The crop region does not fit in the observation.
    #[error("Crop region x1={x1}, y1={y1}, width={width}, height={height} exceeds observation of shape {shape:?}")]
    CropOutOfBounds {
        /// Column offset.
        x1: usize,
        /// Row offset.
        y1: usize,
        /// Width of the region.
        width: usize,
        /// Height of the region.
        height: usize,
        /// Shape of the observation.
        shape: Vec<usize>,
    },

    /// The observation does not fit the observation space.
    #[error("Observation mismatch: {0}")]
    ObservationMismatch(String),

    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),
}
