//! Generic observation wrapper.
use anyhow::Result;
use gym_doom_core::{record::Record, Env, Observation, ObservationSpace, Step};
use log::{debug, trace};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Transforms the observations of a wrapped environment.
///
/// A wrapper derives its own [`ObservationSpace`] from the wrapped environment when it
/// is built, and transforms every observation the wrapped environment emits so that the
/// result is described by that space.
pub trait ObsWrapper {
    /// Configuration.
    type Config: Clone + Default + Serialize + DeserializeOwned;

    /// Builds the wrapper for the given environment.
    fn build<E: Env>(config: &Self::Config, env: &E) -> Result<Self>
    where
        Self: Sized;

    /// Returns the observation space declared by this wrapper.
    fn observation_space(&self) -> &ObservationSpace;

    /// Transforms an observation of the wrapped environment.
    ///
    /// `inner_space` is the observation space currently declared by the wrapped
    /// environment.
    fn filt(
        &mut self,
        inner_space: &ObservationSpace,
        obs: Observation,
    ) -> Result<(Observation, Record)>;

    /// Returns default configuration.
    fn default_config() -> Self::Config {
        Self::Config::default()
    }
}

/// Configuration of [`ObsWrapperEnv`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ObsWrapperEnvConfig<C, WC> {
    /// Configuration of the wrapped environment.
    pub env_config: C,

    /// Configuration of the wrapper.
    pub wrapper_config: WC,
}

impl<C, WC> ObsWrapperEnvConfig<C, WC> {
    /// Creates a configuration.
    pub fn new(env_config: C, wrapper_config: WC) -> Self {
        Self {
            env_config,
            wrapper_config,
        }
    }

    /// Sets the configuration of the wrapped environment.
    pub fn env_config(mut self, env_config: C) -> Self {
        self.env_config = env_config;
        self
    }

    /// Sets the configuration of the wrapper.
    pub fn wrapper_config(mut self, wrapper_config: WC) -> Self {
        self.wrapper_config = wrapper_config;
        self
    }
}

impl<C, WC> ObsWrapperEnvConfig<C, WC>
where
    C: Serialize + DeserializeOwned,
    WC: Serialize + DeserializeOwned,
{
    /// Constructs [`ObsWrapperEnvConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`ObsWrapperEnvConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

/// An environment whose observations are transformed by an [`ObsWrapper`].
///
/// It owns its declared observation space, which is initialised with the space of the
/// wrapper. Since it implements [`Env`], wrappers can be stacked.
pub struct ObsWrapperEnv<E: Env, W: ObsWrapper> {
    env: E,
    wrapper: W,
    observation_space: ObservationSpace,
}

impl<E: Env, W: ObsWrapper> ObsWrapperEnv<E, W> {
    /// Wraps an environment.
    pub fn new(env: E, config: &W::Config) -> Result<Self> {
        let wrapper = W::build(config, &env)?;
        let observation_space = wrapper.observation_space().clone();
        debug!(
            "Wrapped {:?} into {:?}",
            env.observation_space(),
            observation_space
        );

        Ok(Self {
            env,
            wrapper,
            observation_space,
        })
    }

    /// Returns the wrapped environment.
    pub fn inner(&self) -> &E {
        &self.env
    }

    /// Returns the wrapped environment.
    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.env
    }

    /// Unwraps the environment.
    pub fn into_inner(self) -> E {
        self.env
    }

    /// Returns the wrapper.
    pub fn wrapper(&self) -> &W {
        &self.wrapper
    }
}

impl<E: Env, W: ObsWrapper> Env for ObsWrapperEnv<E, W> {
    type Config = ObsWrapperEnvConfig<E::Config, W::Config>;
    type Act = E::Act;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        let env = E::build(&config.env_config, seed)?;
        Self::new(env, &config.wrapper_config)
    }

    fn observation_space(&self) -> &ObservationSpace {
        &self.observation_space
    }

    fn set_observation_space(&mut self, space: ObservationSpace) {
        self.observation_space = space;
    }

    fn reset(&mut self) -> Result<Observation> {
        let obs = self.env.reset()?;
        let (obs, _) = self.wrapper.filt(self.env.observation_space(), obs)?;
        Ok(obs)
    }

    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)> {
        let (step, record) = self.env.step(a)?;
        let (obs, record_wrapper) = self.wrapper.filt(self.env.observation_space(), step.obs)?;
        trace!("ObsWrapperEnv::step(): reward = {}", step.reward);
        let step = Step::new(
            obs,
            step.act,
            step.reward,
            step.is_terminated,
            step.is_truncated,
        );

        Ok((step, record.merge(record_wrapper)))
    }
}
