//! salvation - headless synth player
//!
//! Run with: cargo run
//!
//! Opens the default output device, starts the engine and reads control
//! commands from stdin. Type `help` for the command list.

mod console;

use std::io::{self, BufRead, Write};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use salvation::{
    io::{host::AudioHost, meter::level_meter},
    Controls, Engine,
};
use tracing_subscriber::EnvFilter;

use console::Command;

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let host = AudioHost::open_default().wrap_err("failed to open audio output")?;
    let (mut engine, controls) =
        Engine::build(host.engine_config()).wrap_err("failed to build synth engine")?;

    let (tap, mut meter) = level_meter(256);
    engine.attach_meter(tap);
    load_starting_patch(&controls)?;

    let _stream = host.start(engine).wrap_err("failed to start audio stream")?;

    println!("=== Salvation ===");
    println!("Sample rate: {} Hz", host.sample_rate());
    println!("Channels: {}", host.channels());
    println!("Type `help` for commands, `quit` to stop.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.wrap_err("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => {
                if let Err(err) = console::run(command, &controls, &mut meter, &mut stdout) {
                    println!("error: {err}");
                }
            }
            Err(err) => println!("{err}"),
        }
        stdout.flush()?;
    }

    Ok(())
}

/// A wide saw stack on oscillator A, a quieter square on B.
fn load_starting_patch(controls: &Controls) -> EyreResult<()> {
    let patch = [
        ("osc_a.frequency", 110.0),
        ("osc_a.voices", 7.0),
        ("osc_a.detune", 18.0),
        ("osc_a.blend", 0.6),
        ("osc_b.frequency", 220.0),
        ("osc_b.voices", 3.0),
        ("osc_b.detune", 6.0),
        ("osc_b.level", 0.25),
        ("noise.level", 0.03),
        ("master.volume", 0.5),
    ];
    for (name, value) in patch {
        controls.set_value(name, value)?;
    }
    Ok(())
}
