//! Audio utilities.
//! Signal synthesis and playback.

pub mod algorithms;
pub mod buffer;
pub mod devices;
pub mod noise;
pub mod playback;
pub mod tone;
