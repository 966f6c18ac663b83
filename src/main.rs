use std::{io::stdin, thread};

use anyhow::{Context, Result};
use cpal::traits::DeviceTrait;
use crossbeam::{
    channel::{bounded, Receiver},
    select,
};

mod args;
mod audio;
mod misc;
mod modules;

const DEFAULT_SAMPLE_RATE: u32 = 44100;

fn main() -> Result<()> {
    let matches = args::parse_args();
    let module = args::module(&matches)?;
    println!("[*] Running module `{}`", module.name());

    let device = audio::devices::output_device(&matches)?;
    println!(
        "[*] Output hooked into `{}`",
        device.name().context("Error getting device name")?
    );

    let buffer = module.synthesize();
    let session = audio::playback::play(&device, buffer, module.sample_rate())?;
    println!("[*] Press enter to stop playback early");

    // Wait for the user or for the buffer to run out, whichever comes first.
    // Stopping is a no-op if playback already finished on its own.
    let stop = stop_listener();
    select! {
        recv(session.finished()) -> _ => println!("[*] Playback finished"),
        recv(stop) -> _ => println!("[*] Stopping playback"),
    }
    session.stop()?;

    Ok(())
}

/// Spawns a thread that signals the returned channel once the user presses
/// enter. The thread just leaks if they never do, the process is on its way
/// out by then anyway.
fn stop_listener() -> Receiver<()> {
    let (tx, rx) = bounded(1);
    thread::spawn(move || {
        let _ = stdin().read_line(&mut String::new());
        let _ = tx.send(());
    });

    rx
}
