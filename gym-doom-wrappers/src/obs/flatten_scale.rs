use crate::ObsWrapper;
use anyhow::Result;
use gym_doom_core::{
    record::{Record, RecordValue},
    Array, BoxSpace, Env, Observation, ObservationSpace,
};
use log::{info, trace};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Configuration of [`FlattenScaleObservation`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct FlattenScaleObservationConfig {
    /// If `true`, the flattened and scaled observation is recorded with key `obs`.
    pub record_obs: bool,
}

impl FlattenScaleObservationConfig {
    /// Sets the flag of recording observations.
    pub fn record_obs(mut self, v: bool) -> Self {
        self.record_obs = v;
        self
    }
}

/// Flattens the observation and scales pixel values from `[0, 255]` to `[0, 1]`.
///
/// The declared space is a vector of length `flatdim` of the wrapped space, with values
/// in `[0, 1]`. Values are divided by 255 without clamping.
pub struct FlattenScaleObservation {
    config: FlattenScaleObservationConfig,
    observation_space: ObservationSpace,
}

impl ObsWrapper for FlattenScaleObservation {
    type Config = FlattenScaleObservationConfig;

    fn build<E: Env>(config: &Self::Config, env: &E) -> Result<Self> {
        let flatdim = env.observation_space().flatdim();
        info!("Flatten and scale observation to {} elements", flatdim);

        Ok(Self {
            config: config.clone(),
            observation_space: BoxSpace::unit(flatdim).into(),
        })
    }

    fn observation_space(&self) -> &ObservationSpace {
        &self.observation_space
    }

    fn filt(
        &mut self,
        inner_space: &ObservationSpace,
        obs: Observation,
    ) -> Result<(Observation, Record)> {
        let obs = flatten_scale(inner_space, &obs)?;
        trace!("FlattenScaleObservation::filt(): {} elements", obs.len());
        Ok(into_obs_and_record(obs, self.config.record_obs))
    }
}

/// Flattens `obs` with `space` and divides every element by 255.
pub(super) fn flatten_scale(space: &ObservationSpace, obs: &Observation) -> Result<Array1<f32>> {
    Ok(space.flatten(obs)? / 255f32)
}

pub(super) fn into_obs_and_record(obs: Array1<f32>, record_obs: bool) -> (Observation, Record) {
    let record = if record_obs {
        Record::from_slice(&[("obs", RecordValue::Array1(obs.to_vec()))])
    } else {
        Record::empty()
    };
    (Array::F32(obs.into_dyn()).into(), record)
}
