//! Changes the screen resolution of a Doom environment.
use crate::resolution::{ResolutionConfigurable, ResolutionTarget, ScreenResolution};
use anyhow::Result;
use gym_doom_core::{
    record::Record, BoxSpace, Env, GymDoomError, Observation, ObservationSpace, Step,
};
use log::info;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`SetResolution`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SetResolutionConfig<C> {
    /// Configuration of the wrapped environment.
    pub env_config: C,

    /// Target resolution as `WIDTHxHEIGHT`, one of [`RESOLUTIONS`](crate::RESOLUTIONS).
    pub target_resolution: String,
}

impl<C: Default> Default for SetResolutionConfig<C> {
    fn default() -> Self {
        Self {
            env_config: C::default(),
            target_resolution: "640x480".to_string(),
        }
    }
}

impl<C> SetResolutionConfig<C> {
    /// Creates a configuration with the default target resolution.
    pub fn new(env_config: C) -> Self {
        Self {
            env_config,
            target_resolution: "640x480".to_string(),
        }
    }

    /// Sets the target resolution.
    pub fn target_resolution(mut self, v: impl Into<String>) -> Self {
        self.target_resolution = v.into();
        self
    }
}

impl<C: Serialize + DeserializeOwned> SetResolutionConfig<C> {
    /// Constructs [`SetResolutionConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`SetResolutionConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

/// Doom wrapper to change screen resolution.
///
/// Building the wrapper sets the resolution of the backend and replaces the observation
/// space of the wrapped environment with an RGB image space of the new size. Apply it
/// before any wrapper that depends on the shape of the observation.
pub struct SetResolution<E: ResolutionConfigurable> {
    env: E,
    target: ResolutionTarget,
    observation_space: ObservationSpace,
}

impl<E: ResolutionConfigurable> SetResolution<E> {
    /// Wraps an environment and sets its resolution to `target_resolution`.
    ///
    /// # Errors
    ///
    /// * [`GymDoomError::MissingBackendDependency`] if the backend is not available.
    /// * [`GymDoomError::UnsupportedResolution`] if `target_resolution` is not in
    ///   [`RESOLUTIONS`](crate::RESOLUTIONS).
    /// * [`GymDoomError::MissingBackendResolution`] if the backend has no handle for it.
    pub fn new(mut env: E, target_resolution: &str) -> Result<Self> {
        env.check_backend()?;
        let target = ResolutionTarget::new(target_resolution)?;
        let (width, height) = (target.width(), target.height());
        let resolution = env
            .resolve_screen_resolution(width, height)
            .ok_or(GymDoomError::MissingBackendResolution { width, height })?;

        env.set_screen_resolution(resolution)?;
        let observation_space: ObservationSpace =
            BoxSpace::image(height as usize, width as usize).into();
        env.set_observation_space(observation_space.clone());
        info!("Set screen resolution to {}", resolution.name());

        Ok(Self {
            env,
            target,
            observation_space,
        })
    }

    /// Screen width in pixels.
    pub fn screen_width(&self) -> u32 {
        self.target.width()
    }

    /// Screen height in pixels.
    pub fn screen_height(&self) -> u32 {
        self.target.height()
    }

    /// Screen resolution of the backend.
    pub fn screen_resolution(&self) -> ScreenResolution {
        self.env.screen_resolution()
    }

    /// Returns the wrapped environment.
    pub fn inner(&self) -> &E {
        &self.env
    }

    /// Unwraps the environment.
    pub fn into_inner(self) -> E {
        self.env
    }
}

impl<E: ResolutionConfigurable> Env for SetResolution<E> {
    type Config = SetResolutionConfig<E::Config>;
    type Act = E::Act;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        let env = E::build(&config.env_config, seed)?;
        Self::new(env, &config.target_resolution)
    }

    fn observation_space(&self) -> &ObservationSpace {
        &self.observation_space
    }

    fn set_observation_space(&mut self, space: ObservationSpace) {
        self.observation_space = space;
    }

    fn reset(&mut self) -> Result<Observation> {
        self.env.reset()
    }

    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)> {
        let (step, record) = self.env.step(a)?;
        let step = Step::new(
            step.obs,
            step.act,
            step.reward,
            step.is_terminated,
            step.is_truncated,
        );
        Ok((step, record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::{FrameEnv, FrameEnvConfig};

    #[test]
    fn test_set_resolution_rewrites_inner_space() -> Result<()> {
        let env = FrameEnv::build(&FrameEnvConfig::default(), 0)?;
        let env = SetResolution::new(env, "320x240")?;

        assert_eq!((env.screen_width(), env.screen_height()), (320, 240));
        assert_eq!(env.screen_resolution(), ScreenResolution::Res320X240);
        assert_eq!(env.inner().observation_space(), env.observation_space());
        assert_eq!(
            env.observation_space().as_box().map(|b| b.shape().to_vec()),
            Some(vec![240, 320, 3])
        );
        Ok(())
    }

    #[test]
    fn test_missing_backend_resolution() -> Result<()> {
        let config = FrameEnvConfig::default().missing_resolutions(vec![(320, 240)]);
        let env = FrameEnv::build(&config, 0)?;
        let err = SetResolution::new(env, "320x240").err().map(|e| e.to_string());
        assert_eq!(
            err.as_deref(),
            Some("The backend has no screen resolution RES_320X240")
        );
        Ok(())
    }

    #[test]
    fn test_missing_backend_dependency() -> Result<()> {
        let config = FrameEnvConfig::default().available(false);
        let env = FrameEnv::build(&config, 0)?;
        match SetResolution::new(env, "640x480") {
            Err(e) => assert!(matches!(
                e.downcast_ref::<GymDoomError>(),
                Some(GymDoomError::MissingBackendDependency(_))
            )),
            Ok(_) => panic!("backend should be unavailable"),
        }
        Ok(())
    }
}
