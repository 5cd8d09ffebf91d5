use super::flatten_scale::{flatten_scale, into_obs_and_record};
use crate::ObsWrapper;
use anyhow::Result;
use gym_doom_core::{record::Record, BoxSpace, Env, Observation, ObservationSpace};
use log::{info, trace};
use serde::{Deserialize, Serialize};

/// Configuration of [`FlattenScaleSwapAxisObservation`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct FlattenScaleSwapAxisObservationConfig {
    /// If `true`, the flattened and scaled observation is recorded with key `obs`.
    pub record_obs: bool,
}

impl FlattenScaleSwapAxisObservationConfig {
    /// Sets the flag of recording observations.
    pub fn record_obs(mut self, v: bool) -> Self {
        self.record_obs = v;
        self
    }
}

/// Moves the channel axis to the front, then flattens and scales the observation.
///
/// An image of shape `(H, W, C)` is flattened in `(C, H, W)` order. The declared space
/// is the same as [`FlattenScaleObservation`](super::FlattenScaleObservation).
pub struct FlattenScaleSwapAxisObservation {
    config: FlattenScaleSwapAxisObservationConfig,
    observation_space: ObservationSpace,
}

impl ObsWrapper for FlattenScaleSwapAxisObservation {
    type Config = FlattenScaleSwapAxisObservationConfig;

    fn build<E: Env>(config: &Self::Config, env: &E) -> Result<Self> {
        let flatdim = env.observation_space().flatdim();
        info!(
            "Flatten and scale channel-first observation to {} elements",
            flatdim
        );

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
        let obs = Observation::Array(obs.into_array()?.move_last_axis_to_front());
        let obs = flatten_scale(inner_space, &obs)?;
        trace!(
            "FlattenScaleSwapAxisObservation::filt(): {} elements",
            obs.len()
        );
        Ok(into_obs_and_record(obs, self.config.record_obs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        util::test::{FrameEnv, FrameEnvConfig},
        FlattenScaleObservation, FlattenScaleObservationConfig,
    };

    #[test]
    fn test_channel_first_order() -> Result<()> {
        let env = FrameEnv::build(&FrameEnvConfig::default(), 0)?;
        let mut swap = FlattenScaleSwapAxisObservation::build(&Default::default(), &env)?;
        let mut flat =
            FlattenScaleObservation::build(&FlattenScaleObservationConfig::default(), &env)?;
        assert_eq!(swap.observation_space(), flat.observation_space());

        let frame = env.render()?;
        let (obs_swap, record) = swap.filt(env.observation_space(), frame.clone())?;
        let (obs_flat, _) = flat.filt(env.observation_space(), frame)?;
        assert!(record.is_empty());
        assert!(swap.observation_space().contains(&obs_swap));

        // Element (y, x, c) of the frame is at c * H * W + y * W + x after the swap
        // and at (y * W + x) * C + c without it.
        let (h, w, c) = (480, 640, 3);
        let v_swap = obs_swap.into_array()?.to_flat_vec::<f32>();
        let v_flat = obs_flat.into_array()?.to_flat_vec::<f32>();
        for &(y, x, ch) in [(0, 0, 0), (10, 20, 1), (479, 639, 2), (100, 3, 2)].iter() {
            assert_eq!(v_swap[ch * h * w + y * w + x], v_flat[(y * w + x) * c + ch]);
        }
        assert_ne!(v_swap, v_flat);
        Ok(())
    }
}
