//! Audio device setup and the control loop that feeds it.

use std::{
    thread,
    time::{Duration, Instant},
};

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use log::info;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use tuba_synth::{OutputMode, Tuba, TubaConfig};

use super::{walker::Walker, Args};

const CONTROL_PERIOD: Duration = Duration::from_millis(5);
const DRAIN_WAIT: Duration = Duration::from_millis(100);

pub fn run(args: Args) -> EyreResult<()> {
    // Set up audio
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;
    if config.sample_format() != cpal::SampleFormat::F32 {
        return Err(eyre!(
            "tuba requires f32 output, device offers {:?}",
            config.sample_format()
        ));
    }

    let sample_rate = config.sample_rate().0;
    let channels = config.channels() as usize;

    let mut rng = match args.seed {
        Some(seed) => Pcg32::seed_from_u64(seed),
        None => Pcg32::from_rng(&mut rand::rng()),
    };

    // cpal hands us a dirty buffer, so replace rather than layer
    let tuba_config = TubaConfig::new(sample_rate, channels)
        .output_mode(OutputMode::Overwrite)
        .noise_seed(rng.random());
    let (mut tuba, mut handle) = Tuba::shared(tuba_config).wrap_err("invalid engine config")?;

    let key = args.key.unwrap_or_else(|| rng.random_range(0..12));
    info!("{sample_rate} Hz, {channels} ch, key {key}, tick {}s", args.interval);

    let stream = device.build_output_stream(
        &config.into(),
        move |data: &mut [f32], _| tuba.render(data),
        |err| log::error!("audio stream error: {err}"),
        None,
    )?;
    stream.play()?;

    let mut walker = Walker::new(key, args.interval, handle.now(), rng);
    let deadline = Instant::now() + Duration::from_secs_f64(args.seconds.max(0.0));

    while Instant::now() < deadline {
        walker.poll(handle.now(), &mut handle);
        thread::sleep(CONTROL_PERIOD);
    }

    handle.reset()?;
    thread::sleep(DRAIN_WAIT);
    Ok(())
}
