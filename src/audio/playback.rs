//! Buffer playback.
//! Streams a [`SignalBuffer`] to an output device on the audio thread and
//! lets the caller stop it early or wait for it to run out.

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use cpal::{
    traits::{DeviceTrait, StreamTrait},
    BufferSize, Device, SampleRate, Stream, StreamConfig,
};
use crossbeam::channel::{bounded, Receiver, Sender};

use super::buffer::SignalBuffer;

/// Feeds samples from a buffer into output callbacks.
/// Owned by the audio callback, so no locking is needed; the rest of the
/// program only sees the completion channel.
pub struct BufferSource {
    samples: Vec<f32>,
    position: usize,
    done: Option<Sender<()>>,
}

/// Handle to an in-progress playback.
/// Dropping it stops the output stream.
pub struct PlaybackSession {
    stream: Stream,
    finished: Receiver<()>,
    stopped: AtomicBool,
}

impl BufferSource {
    pub fn new(buffer: SignalBuffer, done: Sender<()>) -> Self {
        Self {
            samples: buffer.into_samples(),
            position: 0,
            done: Some(done),
        }
    }

    /// Copy the next samples into `out`, zero filling once the buffer runs
    /// dry. Signals the completion channel the first time that happens.
    pub fn fill(&mut self, out: &mut [f32]) {
        let take = (self.samples.len() - self.position).min(out.len());
        out[..take].copy_from_slice(&self.samples[self.position..self.position + take]);
        out[take..].fill(0.0);
        self.position += take;

        if self.position == self.samples.len() {
            if let Some(done) = self.done.take() {
                let _ = done.send(());
            }
        }
    }
}

/// Start playing the buffer on the given device.
/// The buffer is validated first so a malformed signal never reaches the
/// device. Returns as soon as the stream is running.
pub fn play(device: &Device, buffer: SignalBuffer, sample_rate: u32) -> Result<PlaybackSession> {
    buffer.validate()?;

    let config = StreamConfig {
        channels: buffer.channels(),
        sample_rate: SampleRate(sample_rate),
        buffer_size: BufferSize::Default,
    };

    let (done, finished) = bounded(1);
    let mut source = BufferSource::new(buffer, done);
    let stream = device
        .build_output_stream(
            &config,
            move |data: &mut [f32], _info: &cpal::OutputCallbackInfo| source.fill(data),
            |err| eprintln!("[-] Stream error: {err}"),
            None,
        )
        .context("Error building output stream")?;
    stream.play().context("Error starting playback")?;

    Ok(PlaybackSession {
        stream,
        finished,
        stopped: AtomicBool::new(false),
    })
}

impl PlaybackSession {
    /// Fires once when the whole buffer has been sent to the device.
    pub fn finished(&self) -> &Receiver<()> {
        &self.finished
    }

    /// Stop the output stream.
    /// Calling this more than once, or after playback has already finished,
    /// does nothing.
    pub fn stop(&self) -> Result<()> {
        if self.stopped.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        self.stream.pause().context("Error stopping output stream")
    }
}

#[cfg(test)]
mod test {
    use crossbeam::channel::bounded;

    use super::BufferSource;
    use crate::audio::buffer::SignalBuffer;

    #[test]
    fn test_fill() {
        let (tx, rx) = bounded(1);
        let mut source = BufferSource::new(SignalBuffer::mono(vec![1.0, 2.0, 3.0]), tx);

        let mut out = [0.0; 2];
        source.fill(&mut out);
        assert_eq!(out, [1.0, 2.0]);
        assert!(rx.try_recv().is_err());

        source.fill(&mut out);
        assert_eq!(out, [3.0, 0.0]);
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn test_fill_signals_once() {
        let (tx, rx) = bounded(1);
        let mut source = BufferSource::new(SignalBuffer::mono(vec![1.0]), tx);

        let mut out = [0.0; 4];
        source.fill(&mut out);
        source.fill(&mut out);
        assert_eq!(out, [0.0; 4]);

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_fill_empty_buffer() {
        let (tx, rx) = bounded(1);
        let mut source = BufferSource::new(SignalBuffer::mono(Vec::new()), tx);

        let mut out = [1.0; 2];
        source.fill(&mut out);
        assert_eq!(out, [0.0; 2]);
        assert!(rx.try_recv().is_ok());
    }
}
