use anyhow::Result;
use gym_doom_core::Env as _;
use gym_doom_wrappers::{
    util::test::{FrameAct, FrameEnv, FrameEnvConfig},
    CropObservation, CropObservationConfig, FlattenScaleObservation,
    FlattenScaleObservationConfig, ObsWrapperEnv, SetResolution,
};
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    fastrand::seed(42);

    let env = FrameEnv::build(&FrameEnvConfig::default().max_steps(10).noise(true), 42)?;
    let env = SetResolution::new(env, "640x480")?;
    let crop = CropObservationConfig::default()
        .x1(0)
        .y1(0)
        .width(320)
        .height(240);
    let env = ObsWrapperEnv::<_, CropObservation>::new(env, &crop)?;
    let config = FlattenScaleObservationConfig::default().record_obs(true);
    let mut env = ObsWrapperEnv::<_, FlattenScaleObservation>::new(env, &config)?;

    let obs = env.reset()?;
    info!("Observation space: {:?}", env.observation_space().as_box().map(|b| b.shape()));
    info!("Initial observation in space: {}", env.observation_space().contains(&obs));

    loop {
        let act = FrameAct(fastrand::u8(..4));
        let (step, record) = env.step(&act)?;
        let mean = record
            .get_array1("obs")
            .map(|v| v.iter().sum::<f32>() / v.len() as f32)?;
        info!("act = {:?}, reward = {}, mean pixel = {:.3}", act, step.reward, mean);
        if step.is_done() {
            break;
        }
    }

    Ok(())
}
