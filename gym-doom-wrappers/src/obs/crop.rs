use crate::ObsWrapper;
use anyhow::Result;
use gym_doom_core::{record::Record, BoxSpace, DType, Env, Observation, ObservationSpace};
use log::{info, trace};
use serde::{Deserialize, Serialize};

/// Configuration of [`CropObservation`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CropObservationConfig {
    /// Column of the top-left corner.
    pub x1: usize,

    /// Row of the top-left corner.
    pub y1: usize,

    /// Width of the region.
    pub width: usize,

    /// Height of the region.
    pub height: usize,
}

impl Default for CropObservationConfig {
    fn default() -> Self {
        // The whole 640x480 frame
        Self {
            x1: 0,
            y1: 0,
            width: 640,
            height: 480,
        }
    }
}

impl CropObservationConfig {
    /// Sets the column of the top-left corner.
    pub fn x1(mut self, v: usize) -> Self {
        self.x1 = v;
        self
    }

    /// Sets the row of the top-left corner.
    pub fn y1(mut self, v: usize) -> Self {
        self.y1 = v;
        self
    }

    /// Sets the width of the region.
    pub fn width(mut self, v: usize) -> Self {
        self.width = v;
        self
    }

    /// Sets the height of the region.
    pub fn height(mut self, v: usize) -> Self {
        self.height = v;
        self
    }
}

/// Crops a fixed rectangular region out of image observations.
///
/// The declared space is an RGB image of shape `(height, width, 3)` with values in
/// `[0, 255]`. The dtype is taken over from the wrapped environment.
pub struct CropObservation {
    config: CropObservationConfig,
    observation_space: ObservationSpace,
}

impl ObsWrapper for CropObservation {
    type Config = CropObservationConfig;

    fn build<E: Env>(config: &Self::Config, env: &E) -> Result<Self> {
        let dtype = env
            .observation_space()
            .as_box()
            .map_or(DType::U8, |b| b.dtype());
        let observation_space =
            BoxSpace::new(0.0, 255.0, [config.height, config.width, 3], dtype).into();
        info!(
            "Crop observation at ({}, {}) with size {}x{}",
            config.x1, config.y1, config.width, config.height
        );

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
        let c = &self.config;
        let obs = obs.into_array()?;
        trace!("CropObservation::filt(): input shape {:?}", obs.shape());
        let obs = obs.crop(c.x1, c.y1, c.width, c.height)?;
        Ok((obs.into(), Record::empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::{FrameEnv, FrameEnvConfig};
    use gym_doom_core::Array;

    #[test]
    fn test_crop_declares_region() -> Result<()> {
        let env = FrameEnv::build(&FrameEnvConfig::default(), 0)?;
        let config = CropObservationConfig::default()
            .x1(10)
            .y1(20)
            .width(100)
            .height(50);
        let mut crop = CropObservation::build(&config, &env)?;

        let space = crop.observation_space().as_box().cloned().unwrap();
        assert_eq!(space.shape(), &[50, 100, 3]);
        assert_eq!(space.dtype(), DType::U8);
        assert_eq!((space.low(), space.high()), (0.0, 255.0));

        let frame = env.render()?;
        let (obs, record) = crop.filt(env.observation_space(), frame.clone())?;
        assert!(record.is_empty());
        assert!(crop.observation_space().contains(&obs));

        let frame = frame.into_array()?;
        let expected = frame.crop(10, 20, 100, 50)?;
        assert_eq!(obs, Observation::Array(expected));
        match (frame, obs.into_array()?) {
            (Array::U8(src), Array::U8(dst)) => {
                assert_eq!(dst[[0, 0, 0]], src[[20, 10, 0]]);
                assert_eq!(dst[[49, 99, 2]], src[[69, 109, 2]]);
            }
            _ => panic!("unexpected dtype"),
        }
        Ok(())
    }

    #[test]
    fn test_crop_exceeding_frame_fails() -> Result<()> {
        let env = FrameEnv::build(&FrameEnvConfig::default(), 0)?;
        let config = CropObservationConfig::default().x1(1);
        let mut crop = CropObservation::build(&config, &env)?;
        assert!(crop.filt(env.observation_space(), env.render()?).is_err());
        Ok(())
    }
}
