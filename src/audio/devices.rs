//! Output device selection.
//! Used at startup to pick the device playback will run on.

use anyhow::{Context, Result};
use clap::ArgMatches;
use cpal::{
    traits::{DeviceTrait, HostTrait},
    Device,
};

use crate::misc::Similarity;

/// Uses the command line flag (-o) to pick the output device.
/// Note: Devices are picked by finding the one with the highest string
/// similarity (dice coefficient) to the given name.
pub fn output_device(args: &ArgMatches) -> Result<Device> {
    let host = cpal::default_host();
    let wanted = args
        .get_one::<String>("output-device")
        .unwrap()
        .to_lowercase();

    let device = match wanted.as_str() {
        "default" => host
            .default_output_device()
            .context("No default output device")?,
        _ => host
            .output_devices()
            .context("Error listing output devices")?
            .map(|x| {
                let name = x.name().unwrap_or_default().to_lowercase();
                (name.similarity(&wanted), x)
            })
            .reduce(|a, b| if a.0 > b.0 { a } else { b })
            .context("No output device found")?
            .1,
    };

    Ok(device)
}
