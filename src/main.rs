use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use polyseq::demo::{demonstrate, growth_trajectory};
use polyseq::{append_and_render, SequenceKind, Snapshot};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let env = env_logger::Env::new()
        .filter_or("POLYSEQ_LOG", "warn")
        .write_style("POLYSEQ_LOG_STYLE");
    env_logger::init_from_env(env);

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let code = exit_code(run(cli.command, &mut out));
    if code != 0 {
        std::process::exit(code);
    }
}

/// Report a failed command on stderr and map it to the process exit code.
fn exit_code(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            1
        }
    }
}

fn run(command: Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Demo { value, json } => run_demo(value, json, out),
        Commands::Append {
            kind,
            seed,
            values,
            json,
        } => run_append(kind, &seed, &values, json, out),
        Commands::Growth {
            initial,
            appends,
            json,
        } => run_growth(initial, appends, json, out),
    }
}

fn run_demo(value: i32, json: bool, out: &mut impl Write) -> Result<()> {
    let snapshots = demonstrate(value);
    if json {
        serde_json::to_writer_pretty(&mut *out, &snapshots).context("serializing snapshots")?;
        writeln!(out)?;
        return Ok(());
    }
    for snapshot in &snapshots {
        writeln!(out, "{}", display::rendering(&snapshot.rendered))?;
    }
    Ok(())
}

fn run_append(
    kind: SequenceKind,
    seed: &[i32],
    values: &[i32],
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mut sequence = kind.build(seed);
    log::debug!("built {} with {} seed values", kind, seed.len());

    let mut rendered = sequence.render();
    for &value in values {
        rendered = append_and_render(sequence.as_mut(), value);
    }

    if json {
        serde_json::to_writer_pretty(&mut *out, &Snapshot::of(kind, sequence.as_ref()))
            .context("serializing snapshot")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", display::rendering(&rendered))?;
    }
    Ok(())
}

fn run_growth(initial: usize, appends: usize, json: bool, out: &mut impl Write) -> Result<()> {
    let events = growth_trajectory(initial, appends);
    if json {
        serde_json::to_writer_pretty(&mut *out, &events).context("serializing growth events")?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", display::growth_header())?;
    for event in &events {
        writeln!(out, "{}", display::growth_row(event))?;
    }
    writeln!(out, "{}", display::growth_summary(&events, appends))?;
    Ok(())
}
