//! Observation wrappers for Doom environments.
//!
//! Every wrapper takes an environment implementing [`Env`], replaces its declared
//! [`ObservationSpace`] and transforms the observations it emits. Wrappers implement
//! [`Env`] themselves, so they are composed by wrapping one into another.
//!
//! * [`SetResolution`] sets the screen resolution of the backend and its declared
//!   space. Apply it first.
//! * [`CropObservation`] crops a fixed region of the frame.
//! * [`FlattenScaleObservation`] flattens the observation and scales it to `[0, 1]`.
//! * [`FlattenScaleSwapAxisObservation`] does the same in channel-first order.
//! * [`DictObservation`] puts the observation into a dict under the key `image`.
//!
//! The last four are [`ObsWrapper`]s applied through [`ObsWrapperEnv`].
//!
//! ```
//! use anyhow::Result;
//! use gym_doom_core::Env;
//! use gym_doom_wrappers::{
//!     util::test::{FrameAct, FrameEnv, FrameEnvConfig},
//!     CropObservation, CropObservationConfig, FlattenScaleObservation, ObsWrapperEnv,
//!     SetResolution,
//! };
//!
//! fn main() -> Result<()> {
//!     let env = FrameEnv::build(&FrameEnvConfig::default(), 42)?;
//!     let env = SetResolution::new(env, "640x480")?;
//!     let crop = CropObservationConfig::default().width(320).height(240);
//!     let env = ObsWrapperEnv::<_, CropObservation>::new(env, &crop)?;
//!     let mut env = ObsWrapperEnv::<_, FlattenScaleObservation>::new(env, &Default::default())?;
//!
//!     let obs = env.reset()?;
//!     assert!(env.observation_space().contains(&obs));
//!
//!     let (step, _) = env.step(&FrameAct(0))?;
//!     assert_eq!(step.obs.as_array().map(|a| a.shape().to_vec()), Some(vec![320 * 240 * 3]));
//!     Ok(())
//! }
//! ```
//!
//! [`Env`]: gym_doom_core::Env
//! [`ObservationSpace`]: gym_doom_core::ObservationSpace
pub mod frame;
mod obs;
pub mod resolution;
mod set_resolution;
pub mod util;
mod wrapper;
pub use obs::{
    CropObservation, CropObservationConfig, DictObservation, DictObservationConfig,
    FlattenScaleObservation, FlattenScaleObservationConfig, FlattenScaleSwapAxisObservation,
    FlattenScaleSwapAxisObservationConfig, IMAGE_KEY, STATE_KEY,
};
pub use resolution::{ResolutionConfigurable, ResolutionTarget, ScreenResolution, RESOLUTIONS};
pub use set_resolution::{SetResolution, SetResolutionConfig};
pub use wrapper::{ObsWrapper, ObsWrapperEnv, ObsWrapperEnvConfig};
