//! Environment.
use super::{Act, Step};
use crate::{record::Record, Observation, ObservationSpace};
use anyhow::Result;

/// Represents an environment emitting observations described by an [`ObservationSpace`].
///
/// This is the capability every wrapper consumes and exposes: a declared observation
/// space that can be read and replaced, and a reset/step mechanism producing
/// observations. Because wrappers implement this trait themselves, they compose.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Action of the environment.
    type Act: Act;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Returns the declared observation space.
    fn observation_space(&self) -> &ObservationSpace;

    /// Replaces the declared observation space.
    fn set_observation_space(&mut self, space: ObservationSpace);

    /// Resets the environment and returns the initial observation.
    fn reset(&mut self) -> Result<Observation>;

    /// Performes an environment step.
    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized;
}
