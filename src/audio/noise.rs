//! Brown noise synthesis.
//! A random walk over standard normal steps, normalized and scaled.

use rand::Rng;
use rand_distr::StandardNormal;

use super::buffer::SignalBuffer;

/// Synthesize `duration` seconds of brown noise at the given sample rate.
/// The raw random walk is normalized to [-1, 1] and then scaled by
/// `volume * volume_multiplier`, so the final peak is at most that product.
pub fn brown_noise(
    duration: f32,
    sample_rate: u32,
    volume: f32,
    volume_multiplier: f32,
) -> SignalBuffer {
    let mut rng = rand::thread_rng();
    brown_noise_with(&mut rng, duration, sample_rate, volume, volume_multiplier)
}

/// [`brown_noise`] with a caller supplied random number generator.
pub fn brown_noise_with<R: Rng>(
    rng: &mut R,
    duration: f32,
    sample_rate: u32,
    volume: f32,
    volume_multiplier: f32,
) -> SignalBuffer {
    let frames = (duration as f64 * sample_rate as f64).round() as usize;

    // Sum the white noise steps as we go.
    // The accumulator stays f64 so long runs don't lose the small steps.
    let mut samples = Vec::with_capacity(frames);
    let mut sum = 0.0_f64;
    for _ in 0..frames {
        let step: f64 = rng.sample(StandardNormal);
        sum += step;
        samples.push(sum as f32);
    }

    let mut buffer = SignalBuffer::mono(samples);
    buffer.normalize();
    buffer.scale(volume * volume_multiplier);
    buffer
}
