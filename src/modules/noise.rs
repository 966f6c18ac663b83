//! Brown noise module.
//! A low rumble for drowning out everything else.

use std::sync::Arc;

use crate::{
    audio::{buffer::SignalBuffer, noise},
    misc::parse_or,
    modules::{InitContext, Module},
};

const DEFAULT_DURATION: f32 = 1500.0;
const DEFAULT_VOLUME: f32 = 0.1;
const DEFAULT_VOLUME_MULTIPLIER: f32 = 4.0;

pub struct BrownNoise {
    params: Params,
}

/// Synthesis parameters, read from the command line once at startup.
struct Params {
    duration: f32,
    sample_rate: u32,
    volume: f32,
    volume_multiplier: f32,
}

impl BrownNoise {
    pub fn new(ctx: InitContext) -> Arc<Self> {
        let params = Params {
            duration: parse_or(ctx.args.get_one("duration"), "--duration", DEFAULT_DURATION),
            sample_rate: ctx.sample_rate(),
            volume: parse_or(ctx.args.get_one("volume"), "--volume", DEFAULT_VOLUME),
            volume_multiplier: parse_or(
                ctx.args.get_one("volume-multiplier"),
                "--volume-multiplier",
                DEFAULT_VOLUME_MULTIPLIER,
            ),
        };

        Arc::new(Self { params })
    }
}

impl Module for BrownNoise {
    fn name(&self) -> &'static str {
        "brown-noise"
    }

    fn synthesize(&self) -> SignalBuffer {
        let p = &self.params;
        println!("[*] Playing brown noise for {} seconds", p.duration);
        noise::brown_noise(p.duration, p.sample_rate, p.volume, p.volume_multiplier).into_stereo()
    }

    fn sample_rate(&self) -> u32 {
        self.params.sample_rate
    }
}
