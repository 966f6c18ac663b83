//! Audio processing algorithms.

use std::f32::consts::PI;

use num_complex::Complex;

/// Implements the [Goertzel algorithm](https://en.wikipedia.org/wiki/Goertzel_algorithm)
/// to find the magnitude of a single frequency in a slice of samples.
/// Used by the synthesis tests to check where a channel's energy sits.
pub fn goertzel_mag(freq: f32, samples: &[f32], sample_rate: u32) -> f32 {
    let bin = (0.5 + (samples.len() as f32 * freq) / sample_rate as f32).floor();
    let omega = (2.0 * PI * bin) / samples.len() as f32;
    let coeff = omega.cos() * 2.0;

    let mut s1 = 0.0;
    let mut s2 = 0.0;
    for x in samples {
        let s = coeff * s1 - s2 + x;
        s2 = s1;
        s1 = s;
    }

    Complex::new(s1 - s2 * omega.cos(), s2 * omega.sin()).norm()
}

#[cfg(test)]
mod test {
    use std::f32::consts::TAU;

    use super::goertzel_mag;

    #[test]
    fn test_goertzel_finds_sine() {
        let sample_rate = 8000;
        let samples = (0..8000)
            .map(|i| (TAU * 500.0 * i as f32 / sample_rate as f32).sin())
            .collect::<Vec<_>>();

        let on = goertzel_mag(500.0, &samples, sample_rate);
        let off = goertzel_mag(700.0, &samples, sample_rate);
        assert!(on > off * 100.0);
    }
}
