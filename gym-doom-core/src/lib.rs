#![warn(missing_docs)]
//! Environment primitives for Doom observation wrappers.
//!
//! An environment implementing [`Env`] declares the shape, bounds and dtype of its
//! observations with an [`ObservationSpace`] and emits [`Observation`] values at every
//! step. Wrappers built on this crate replace both the declared space and the emitted
//! values, and the two must stay consistent: [`ObservationSpace::contains`] checks that
//! a value is described by a space.
pub mod error;
pub mod record;

mod base;
pub use base::{Act, Env, Step};

mod obs;
pub use obs::{Array, Observation};

mod space;
pub use space::{BoxSpace, DType, ObservationSpace};

pub use error::GymDoomError;
