//! Binaural beat module.
//! Plays slightly different tones in each ear, the brain perceives a slow
//! beat at the difference frequency.

use std::sync::Arc;

use crate::{
    audio::{buffer::SignalBuffer, tone},
    misc::parse_or,
    modules::{InitContext, Module},
};

const DEFAULT_BASE_FREQ: f32 = 100.0;
const DEFAULT_BEAT_FREQ: f32 = 15.0;
const DEFAULT_DURATION: f32 = 1500.0;
const DEFAULT_VOLUME: f32 = 0.1;

pub struct BinauralBeat {
    params: Params,
}

/// Synthesis parameters, read from the command line once at startup.
struct Params {
    base_freq: f32,
    beat_freq: f32,
    duration: f32,
    sample_rate: u32,
    volume: f32,
}

impl BinauralBeat {
    pub fn new(ctx: InitContext) -> Arc<Self> {
        let params = Params {
            base_freq: parse_or(ctx.args.get_one("base"), "--base", DEFAULT_BASE_FREQ),
            beat_freq: parse_or(ctx.args.get_one("beat"), "--beat", DEFAULT_BEAT_FREQ),
            duration: parse_or(ctx.args.get_one("duration"), "--duration", DEFAULT_DURATION),
            sample_rate: ctx.sample_rate(),
            volume: parse_or(ctx.args.get_one("volume"), "--volume", DEFAULT_VOLUME),
        };

        Arc::new(Self { params })
    }
}

impl Module for BinauralBeat {
    fn name(&self) -> &'static str {
        "binaural-beat"
    }

    fn synthesize(&self) -> SignalBuffer {
        let p = &self.params;
        println!(
            "[*] Playing binaural beat with {} Hz (left) and {} Hz (right) for {} seconds",
            p.base_freq,
            p.base_freq + p.beat_freq,
            p.duration
        );
        tone::binaural_beat(p.base_freq, p.beat_freq, p.duration, p.sample_rate, p.volume)
    }

    fn sample_rate(&self) -> u32 {
        self.params.sample_rate
    }
}
