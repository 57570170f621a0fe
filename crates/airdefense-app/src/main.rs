//! airdefense: headless driver for the proportional-navigation simulator.

use std::process;

use log::{error, info};

use airdefense_app::args::{self, Command, RunOptions};
use airdefense_app::driver::{self, DriverOptions};
use airdefense_app::error::AppError;
use airdefense_app::report;
use airdefense_sim::core::config::GuidanceConfig;
use airdefense_sim::scenario::{self, Scenario};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = execute(&argv) {
        error!("{err}");
        if matches!(err, AppError::Usage(_)) {
            eprintln!("{}", args::usage());
        }
        process::exit(1);
    }
}

fn execute(argv: &[String]) -> Result<(), AppError> {
    match args::parse(argv)? {
        Command::Help => {
            println!("{}", args::usage());
            Ok(())
        }
        Command::Run {
            scenario,
            threats,
            options,
        } => {
            let mut base = match scenario {
                Some(path) => {
                    info!("loading scenario {}", path.display());
                    Scenario::load(&path)?
                }
                None => Scenario::default(),
            };
            base.threats.extend(threats);
            simulate(base, &options)
        }
        Command::Raid {
            seed,
            params,
            options,
        } => {
            let config = GuidanceConfig::default();
            let threats = scenario::raid(seed, config.launch_origin, &params)?;
            info!("generated raid of {} threats with seed {seed}", threats.len());
            simulate(Scenario { config, threats }, &options)
        }
    }
}

fn simulate(mut scenario: Scenario, options: &RunOptions) -> Result<(), AppError> {
    if let Some(dt) = options.dt {
        scenario.config.dt = dt;
    }
    if let Some(duration) = options.duration {
        scenario.config.total_simulated_time = duration;
    }

    let mut engine = scenario.into_engine()?;
    print!("{}", report::threat_listing(engine.pairs()));
    print!("{}", report::engagement_listing(engine.pairs()));

    let driver_options = DriverOptions {
        realtime: options.realtime,
        stop_when_clear: options.stop_when_clear,
    };
    let summary = driver::run(&mut engine, driver_options, |step| {
        for record in &step.new_hits {
            println!("{}", report::hit_line(record));
        }
    });

    println!();
    print!("{}", report::neutralized_table(engine.neutralizations()));
    println!("{}", report::summary_line(&summary));

    if let Some(path) = &options.report {
        report::write_json(path, &engine.snapshot())?;
        info!("report written to {}", path.display());
    }
    Ok(())
}
