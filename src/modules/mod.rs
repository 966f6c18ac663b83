use clap::ArgMatches;

use crate::{audio::buffer::SignalBuffer, misc::parse_or, DEFAULT_SAMPLE_RATE};

pub mod beat;
pub mod noise;

pub trait Module {
    fn name(&self) -> &'static str;
    /// Build the complete signal this module plays.
    fn synthesize(&self) -> SignalBuffer;
    /// The sample rate the signal was synthesized at.
    fn sample_rate(&self) -> u32;
}

pub struct InitContext {
    pub args: ArgMatches,
}

impl InitContext {
    pub fn sample_rate(&self) -> u32 {
        parse_or(
            self.args.get_one("sample-rate"),
            "--sample-rate",
            DEFAULT_SAMPLE_RATE,
        )
    }
}
