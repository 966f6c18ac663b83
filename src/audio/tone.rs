//! Binaural beat synthesis.
//! Two pure sine tones a few hertz apart, one per ear.

use std::f64::consts::TAU;

use super::buffer::SignalBuffer;

/// Synthesize a stereo binaural beat.
/// The left channel is a sine at `base_freq`, the right channel a sine at
/// `base_freq + beat_freq`, both scaled by `volume`.
///
/// Both channels are evaluated from a single time base so they stay phase
/// aligned for the whole run. Time is kept in f64 because an f32 frame index
/// loses integer precision past ~2^24 frames, which a long session at
/// 44.1kHz will exceed.
pub fn binaural_beat(
    base_freq: f32,
    beat_freq: f32,
    duration: f32,
    sample_rate: u32,
    volume: f32,
) -> SignalBuffer {
    let frames = (duration as f64 * sample_rate as f64).round() as usize;

    let mut left = Vec::with_capacity(frames);
    let mut right = Vec::with_capacity(frames);
    for i in 0..frames {
        let t = i as f64 / sample_rate as f64;
        left.push((TAU * base_freq as f64 * t).sin() as f32 * volume);
        right.push((TAU * (base_freq + beat_freq) as f64 * t).sin() as f32 * volume);
    }

    SignalBuffer::stereo(left, right)
}

#[cfg(test)]
mod test {
    use std::f64::consts::TAU;

    use super::binaural_beat;
    use crate::audio::algorithms::goertzel_mag;

    /// Split an interleaved stereo buffer into its two channels.
    fn channels(samples: &[f32]) -> (Vec<f32>, Vec<f32>) {
        let left = samples.iter().step_by(2).copied().collect();
        let right = samples.iter().skip(1).step_by(2).copied().collect();
        (left, right)
    }

    #[test]
    fn test_beat_length() {
        let buf = binaural_beat(220.0, 15.0, 1.0, 44100, 0.1);

        assert_eq!(buf.channels(), 2);
        assert_eq!(buf.frames(), 44100);
    }

    #[test]
    fn test_beat_starts_at_zero() {
        let buf = binaural_beat(220.0, 15.0, 1.0, 44100, 0.1);
        let (left, right) = channels(buf.samples());

        assert_eq!(left[0], 0.0);
        assert_eq!(right[0], 0.0);
    }

    #[test]
    fn test_beat_shared_time_base() {
        let (base, beat, sample_rate) = (220.0_f32, 15.0_f32, 44100_u32);
        let buf = binaural_beat(base, beat, 0.1, sample_rate, 1.0);
        let (left, right) = channels(buf.samples());

        for (i, (l, r)) in left.iter().zip(&right).enumerate() {
            let t = i as f64 / sample_rate as f64;
            assert_eq!(*l, (TAU * base as f64 * t).sin() as f32);
            assert_eq!(*r, (TAU * (base + beat) as f64 * t).sin() as f32);
        }
    }

    #[test]
    fn test_beat_channel_frequencies() {
        let buf = binaural_beat(440.0, 4.0, 2.0, 8000, 1.0);
        let (left, right) = channels(buf.samples());
        assert_eq!(left.len(), 16000);
        assert_eq!(right.len(), 16000);

        // The left channel should peak at the base frequency and the right
        // at base + beat, with next to no energy at the other channel's
        // frequency.
        let left_on = goertzel_mag(440.0, &left, 8000);
        let left_off = goertzel_mag(444.0, &left, 8000);
        let right_on = goertzel_mag(444.0, &right, 8000);
        let right_off = goertzel_mag(440.0, &right, 8000);

        assert!(left_on > left_off * 10.0);
        assert!(right_on > right_off * 10.0);
    }

    #[test]
    fn test_beat_volume() {
        let buf = binaural_beat(440.0, 4.0, 0.5, 8000, 0.25);
        assert!(buf.peak() <= 0.25);
    }
}
