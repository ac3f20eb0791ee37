//! Line commands for driving the engine from a terminal.

use std::io::Write;

use color_eyre::eyre::{bail, eyre, Result as EyreResult};
use salvation::{io::meter::MeterReader, Controls};

const USAGE: &str = "commands: set <param> <value> | bypass <section> on|off | list | level | help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set { name: String, value: f32 },
    Bypass { section: String, enabled: bool },
    List,
    Level,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> EyreResult<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            bail!(USAGE);
        };

        let command = match verb {
            "set" => {
                let name = words.next().ok_or_else(|| eyre!("usage: set <param> <value>"))?;
                let value = words
                    .next()
                    .ok_or_else(|| eyre!("usage: set <param> <value>"))?
                    .parse::<f32>()
                    .map_err(|err| eyre!("invalid value: {err}"))?;
                Command::Set {
                    name: name.to_owned(),
                    value,
                }
            }
            "bypass" => {
                let section = words
                    .next()
                    .ok_or_else(|| eyre!("usage: bypass <section> on|off"))?;
                let enabled = match words.next() {
                    Some("on") => true,
                    Some("off") => false,
                    _ => bail!("usage: bypass <section> on|off"),
                };
                Command::Bypass {
                    section: section.to_owned(),
                    enabled,
                }
            }
            "list" => Command::List,
            "level" => Command::Level,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => bail!("unknown command `{other}`\n{USAGE}"),
        };

        if words.next().is_some() {
            bail!("too many arguments\n{USAGE}");
        }
        Ok(command)
    }
}

pub fn run(
    command: Command,
    controls: &Controls,
    meter: &mut MeterReader,
    out: &mut impl Write,
) -> EyreResult<()> {
    match command {
        Command::Set { name, value } => {
            controls.set_value(&name, value)?;
            if let Some(param) = controls.param(&name) {
                writeln!(out, "{name} = {}", param.value())?;
            }
        }
        Command::Bypass { section, enabled } => {
            controls.set_bypass(&section, enabled)?;
            writeln!(out, "{section} bypass {}", if enabled { "on" } else { "off" })?;
        }
        Command::List => {
            for section in controls.sections() {
                let state = if section.bypass().is_enabled() {
                    "bypassed"
                } else {
                    "active"
                };
                writeln!(out, "[{}] {state}", section.section())?;
                for param in section.params() {
                    let (min, max) = param.range();
                    writeln!(out, "  {:<18} {:>10.3}  ({min} .. {max})", param.name(), param.value())?;
                }
            }
        }
        Command::Level => {
            let peak = meter.drain_peak();
            let db = if peak > 0.0 { 20.0 * peak.log10() } else { f32::NEG_INFINITY };
            writeln!(out, "peak {peak:.3} ({db:.1} dBFS)")?;
        }
        Command::Help => writeln!(out, "{USAGE}")?,
        Command::Quit => {}
    }
    Ok(())
}
