use crate::ObsWrapper;
use anyhow::Result;
use gym_doom_core::{
    record::{Record, RecordValue},
    BoxSpace, Env, Observation, ObservationSpace,
};
use log::{info, trace};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key of the image in [`DictObservation`].
pub const IMAGE_KEY: &str = "image";

/// Key of the state in the space of [`DictObservation`].
pub const STATE_KEY: &str = "state";

/// Configuration of [`DictObservation`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DictObservationConfig {
    /// Keys of the arrays to be recorded, flattened. If `None`, no values will be recorded.
    pub record_keys: Option<Vec<String>>,
}

impl DictObservationConfig {
    /// Sets the keys of the arrays to be recorded.
    pub fn record_keys(mut self, v: Option<Vec<String>>) -> Self {
        self.record_keys = v;
        self
    }
}

/// Returns a dict of observations instead of a single array.
///
/// The declared space has two entries, `image` and `state`, both vectors of length
/// `flatdim` of the wrapped space with values in `[0, 1]`. The emitted dict only has
/// `image`, bound to the unmodified observation: `state` is declared but never filled,
/// see [`DictObservation::unpopulated_keys`].
pub struct DictObservation {
    config: DictObservationConfig,
    observation_space: ObservationSpace,
}

impl DictObservation {
    /// Keys declared in the observation space but absent from emitted observations.
    pub fn unpopulated_keys(&self) -> Vec<&str> {
        vec![STATE_KEY]
    }
}

impl ObsWrapper for DictObservation {
    type Config = DictObservationConfig;

    fn build<E: Env>(config: &Self::Config, env: &E) -> Result<Self> {
        let flatdim = env.observation_space().flatdim();
        let observation_space = ObservationSpace::Dict(BTreeMap::from([
            (IMAGE_KEY.to_string(), BoxSpace::unit(flatdim)),
            (STATE_KEY.to_string(), BoxSpace::unit(flatdim)),
        ]));
        info!("Dict observation with {} elements per key", flatdim);

        Ok(Self {
            config: config.clone(),
            observation_space,
        })
    }

    fn observation_space(&self) -> &ObservationSpace {
        &self.observation_space
    }

    fn filt(
        &mut self,
        _inner_space: &ObservationSpace,
        obs: Observation,
    ) -> Result<(Observation, Record)> {
        let image = obs.into_array()?;
        trace!("DictObservation::filt(): image shape {:?}", image.shape());
        let obs = BTreeMap::from([(IMAGE_KEY.to_string(), image)]);

        let mut record = Record::empty();
        if let Some(keys) = &self.config.record_keys {
            obs.iter().for_each(|(key, arr)| {
                if keys.contains(key) {
                    record.insert(key, RecordValue::Array1(arr.to_flat_vec::<f32>()));
                }
            });
        }

        Ok((Observation::Dict(obs), record))
    }
}
