//! The [`SignalBuffer`] struct.
//! A fully synthesized signal, ready to be sent to an output device.

use anyhow::{ensure, Result};

/// An interleaved buffer of f32 samples with one or two channels.
/// Samples are conceptually in [-1.0, 1.0] until a gain is applied.
pub struct SignalBuffer {
    samples: Vec<f32>,
    channels: u16,
}

impl SignalBuffer {
    /// Create a buffer from already interleaved samples.
    pub fn interleaved(samples: Vec<f32>, channels: u16) -> Self {
        Self { samples, channels }
    }

    /// Create a single channel buffer.
    pub fn mono(samples: Vec<f32>) -> Self {
        Self::interleaved(samples, 1)
    }

    /// Create a two channel buffer from separate left and right sample vectors.
    /// Both channels must be the same length.
    pub fn stereo(left: Vec<f32>, right: Vec<f32>) -> Self {
        debug_assert_eq!(left.len(), right.len());

        let mut samples = Vec::with_capacity(left.len() * 2);
        for (l, r) in left.into_iter().zip(right) {
            samples.push(l);
            samples.push(r);
        }

        Self::interleaved(samples, 2)
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// The number of frames (samples per channel) in the buffer.
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    /// The largest absolute sample value.
    /// Zero if the buffer is empty.
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0, |a, &b| a.max(b.abs()))
    }

    /// Scale the buffer so its peak absolute value is exactly 1.0.
    /// If the peak is exactly zero there is nothing to normalize and the
    /// buffer is left untouched.
    pub fn normalize(&mut self) {
        let peak = self.peak();
        if peak == 0.0 {
            return;
        }

        self.samples.iter_mut().for_each(|x| *x /= peak);
    }

    /// Multiply every sample by the given gain.
    pub fn scale(&mut self, gain: f32) {
        self.samples.iter_mut().for_each(|x| *x *= gain);
    }

    /// Duplicate a mono signal into two identical channels.
    /// Buffers that are already stereo are returned unchanged.
    pub fn into_stereo(self) -> Self {
        if self.channels == 2 {
            return self;
        }

        let mut samples = Vec::with_capacity(self.samples.len() * 2);
        for x in self.samples {
            samples.push(x);
            samples.push(x);
        }

        Self::interleaved(samples, 2)
    }

    /// Check that the buffer can safely be sent to an output device.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (1..=2).contains(&self.channels),
            "Unsupported channel count: {}",
            self.channels
        );
        ensure!(
            self.samples.len() % self.channels as usize == 0,
            "Sample count {} is not divisible by the channel count {}",
            self.samples.len(),
            self.channels
        );
        ensure!(
            self.samples.iter().all(|x| x.is_finite()),
            "Buffer contains non-finite samples"
        );

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::SignalBuffer;

    #[test]
    fn test_normalize() {
        let mut buf = SignalBuffer::mono(vec![0.5, -2.0, 1.0]);
        buf.normalize();

        assert_eq!(buf.samples(), &[0.25, -1.0, 0.5]);
        assert_eq!(buf.peak(), 1.0);
    }

    #[test]
    fn test_normalize_zero_peak() {
        let mut buf = SignalBuffer::mono(vec![0.0, 0.0, 0.0]);
        buf.normalize();

        assert_eq!(buf.samples(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_stereo_interleave() {
        let buf = SignalBuffer::stereo(vec![1.0, 2.0], vec![-1.0, -2.0]);

        assert_eq!(buf.channels(), 2);
        assert_eq!(buf.frames(), 2);
        assert_eq!(buf.samples(), &[1.0, -1.0, 2.0, -2.0]);
    }

    #[test]
    fn test_into_stereo() {
        let buf = SignalBuffer::mono(vec![0.1, 0.2]).into_stereo();

        assert_eq!(buf.channels(), 2);
        assert_eq!(buf.samples(), &[0.1, 0.1, 0.2, 0.2]);
    }

    #[test]
    fn test_validate() {
        assert!(SignalBuffer::mono(vec![0.0, 1.0]).validate().is_ok());
        assert!(SignalBuffer::mono(vec![f32::NAN]).validate().is_err());
        assert!(SignalBuffer::mono(vec![f32::INFINITY]).validate().is_err());
        assert!(SignalBuffer::interleaved(vec![0.0; 9], 3).validate().is_err());
        assert!(SignalBuffer::interleaved(vec![0.0; 3], 2).validate().is_err());
    }
}
