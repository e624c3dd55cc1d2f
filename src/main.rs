//! Tone mixer - an educational signal workbench
//!
//! Mix sine, square, triangle and sawtooth tones, add Gaussian noise, then
//! look at the result in time and frequency or listen to it.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use tonemixer::actions::ToneMixer;
use tonemixer::cli::{Args, Command};
use tonemixer::input::FormValues;
use tonemixer::logging;
use tonemixer::output::OutputDir;
use tonemixer::params::{PlotConfig, UiConfig};

fn main() -> ExitCode {
    let args = Args::parse();

    let mut form = FormValues::default();
    args.fields.apply_to(&mut form);

    let result = match args.command {
        Some(command) => run_headless(&args, command, &form),
        None => run_interactive(&args, form),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_headless(args: &Args, command: Command, form: &FormValues) -> anyhow::Result<ExitCode> {
    logging::init_console(args.log_level.into()).context("Failed to initialize logging")?;

    let output = OutputDir::new(&args.output_dir);
    let mut mixer = ToneMixer::new(PlotConfig::default(), output);

    match mixer.run(command.action(), form, command.save()) {
        Ok(outcome) => {
            println!("{}", outcome.summary);
            for path in &outcome.saved {
                println!("Saved {}", path.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}: {}", e.title(), e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_interactive(args: &Args, form: FormValues) -> anyhow::Result<ExitCode> {
    let config = UiConfig::default();
    let level: log::Level = args.log_level.into();
    let history = logging::init_history(level.to_level_filter(), config.log_history)
        .context("Failed to initialize logging")?;

    let output = OutputDir::new(&args.output_dir);
    let mut mixer = ToneMixer::new(PlotConfig::default(), output);

    tonemixer::ui::run(&mut mixer, form, &history, &config)?;
    Ok(ExitCode::SUCCESS)
}
