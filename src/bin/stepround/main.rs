mod config;
mod duration_arg;
mod logging;

use config::Config;
use duration_arg::DurationArg;
use log::*;
use std::path::PathBuf;
use stepround::{round_to_nearest, DurationUnit, RoundDuration};
use structopt::{clap::AppSettings, StructOpt};

const APP_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Debug, StructOpt)]
#[structopt(name = APP_NAME, author, about)]
struct Opt {
    /// Enable verbose logging
    #[structopt(short, long)]
    verbose: bool,
    /// Custom path to the app's configuration file. By default the app will use the system-specific user configuration
    /// directory.
    #[structopt(short, long)]
    config: Option<PathBuf>,
    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Round an integer to the nearest multiple of a step
    #[structopt(setting = AppSettings::AllowNegativeNumbers)]
    Integer {
        value: i64,
        /// The step to round to. Defaults to the configured integer step.
        #[structopt(short, long)]
        step: Option<i64>,
    },
    /// Round a real number to the nearest multiple of a step using exact decimal arithmetic
    #[structopt(setting = AppSettings::AllowNegativeNumbers)]
    Real {
        value: f64,
        /// The step to round to. Defaults to the configured real step.
        #[structopt(short, long)]
        step: Option<f64>,
    },
    /// Round a duration such as 500ms, 90s or 1h30m to the nearest multiple of a step or a whole unit
    Duration {
        value: DurationArg,
        /// The step to round to, printing the rounded duration
        #[structopt(short, long, conflicts_with = "unit")]
        step: Option<DurationArg>,
        /// The unit to round to, printing how many units the rounded duration is. Defaults to the configured unit.
        #[structopt(short, long, possible_values = DurationUnit::VARIANTS)]
        unit: Option<DurationUnit>,
    },
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    setup_logging(&opt)?;
    let cfg = load_config(&opt)?;

    debug!("{:?}", opt);
    debug!("{:?}", cfg);

    println!("{}", run(&opt.command, &cfg)?);
    Ok(())
}

fn run(command: &Command, cfg: &Config) -> anyhow::Result<String> {
    Ok(match *command {
        Command::Integer { value, step } => {
            let step = step.unwrap_or(cfg.integer_step);
            debug!("Rounding {} to nearest {}", value, step);
            round_to_nearest(value, step)?.to_string()
        }
        Command::Real { value, step } => {
            let step = step.unwrap_or(cfg.real_step);
            debug!("Rounding {} to nearest {}", value, step);
            round_to_nearest(value, step)?.to_string()
        }
        Command::Duration {
            value,
            step: Some(step),
            ..
        } => {
            debug!("Rounding {} to nearest {}", value, step);
            DurationArg(round_to_nearest(value.0, step.0)?).to_string()
        }
        Command::Duration {
            value,
            step: None,
            unit,
        } => {
            let unit = unit.unwrap_or(cfg.duration_unit);
            debug!("Rounding {} to nearest {}", value, unit);
            value.0.round_to_unit(unit)?.to_string()
        }
    })
}

fn setup_logging(opt: &Opt) -> anyhow::Result<()> {
    logging::setup_logging(if opt.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    })?;
    Ok(())
}

fn load_config(opt: &Opt) -> anyhow::Result<Config> {
    Ok(match opt.config.as_deref() {
        Some(path) => confy::load_path(path)?,
        None => confy::load(APP_NAME)?,
    })
}
