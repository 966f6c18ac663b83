use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Arg, ArgMatches, Command};

use crate::modules::{beat::BinauralBeat, noise::BrownNoise, InitContext, Module};

pub fn parse_args() -> ArgMatches {
    Command::new("noisebox")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .args([
            Arg::new("output-device")
                .short('o')
                .long("output-device")
                .default_value("default")
                .global(true)
                .help("Output device to play on. The closest matching device name is used."),
            Arg::new("sample-rate")
                .short('r')
                .long("sample-rate")
                .global(true)
                .help("Output sample rate in hertz [default: 44100]"),
        ])
        .subcommands([
            Command::new("noise")
                .alias("n")
                .about("Plays brown noise.")
                .args([
                    Arg::new("duration")
                        .short('d')
                        .long("duration")
                        .help("Playback duration in seconds [default: 1500]"),
                    Arg::new("volume")
                        .short('v')
                        .long("volume")
                        .help("Volume from 0.0 to 1.0 [default: 0.1]"),
                    Arg::new("volume-multiplier")
                        .short('m')
                        .long("volume-multiplier")
                        .help("Amplification applied on top of the volume [default: 4]"),
                ]),
            Command::new("beat")
                .alias("b")
                .about("Plays a binaural beat.")
                .args([
                    Arg::new("base")
                        .short('f')
                        .long("base")
                        .help("Base frequency in hertz, played in the left ear [default: 100]"),
                    Arg::new("beat")
                        .short('b')
                        .long("beat")
                        .help("Beat frequency in hertz, the right ear gets base + beat [default: 15]"),
                    Arg::new("duration")
                        .short('d')
                        .long("duration")
                        .help("Playback duration in seconds [default: 1500]"),
                    Arg::new("volume")
                        .short('v')
                        .long("volume")
                        .help("Volume from 0.0 to 1.0 [default: 0.1]"),
                ]),
        ])
        .get_matches()
}

pub fn module(args: &ArgMatches) -> Result<Arc<dyn Module>> {
    let ic = |x: &ArgMatches| InitContext { args: x.to_owned() };

    let module: Arc<dyn Module> = match args.subcommand() {
        Some(("noise", m)) => BrownNoise::new(ic(m)),
        Some(("beat", m)) => BinauralBeat::new(ic(m)),
        _ => bail!("Invalid subcommand"),
    };

    Ok(module)
}
