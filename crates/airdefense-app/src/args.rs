//! Command-line parsing.
//!
//! Usage:
//!   airdefense run --scenario raid.json --report out.json
//!   airdefense run --threat 0,300,0,0 --threat -150,350,15,-10 --realtime
//!   airdefense raid --count 6 --seed 7

use std::path::PathBuf;

use glam::DVec2;

use airdefense_sim::scenario::{RaidParams, ThreatSpec};

use crate::error::AppError;

/// Options shared by every subcommand that runs the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub dt: Option<f64>,
    pub duration: Option<f64>,
    pub realtime: bool,
    pub stop_when_clear: bool,
    pub report: Option<PathBuf>,
}

/// A parsed invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run {
        scenario: Option<PathBuf>,
        threats: Vec<ThreatSpec>,
        options: RunOptions,
    },
    Raid {
        seed: u64,
        params: RaidParams,
        options: RunOptions,
    },
    Help,
}

pub fn usage() -> &'static str {
    "airdefense: proportional-navigation intercept simulator\n\
     \n\
     Commands:\n\
     \n\
     run       Run a scenario file and/or threats given on the command line\n\
     \n\
       --scenario <path>      Scenario JSON (config + threats)\n\
       --threat <x,y,vx,vy>   Add a threat (repeatable)\n\
     \n\
     raid      Generate and run a seeded raid\n\
     \n\
       --count <N>            Number of threats (default: 4)\n\
       --seed <S>             RNG seed (default: 42)\n\
       --radius <R>           Spawn ring radius (default: 400)\n\
       --min-speed <V>        Minimum threat speed (default: 10)\n\
       --max-speed <V>        Maximum threat speed (default: 30)\n\
     \n\
     Common options:\n\
     \n\
       --dt <s>               Override the time step\n\
       --duration <s>         Override the simulated duration\n\
       --realtime             Pace frames to wall-clock time\n\
       --stop-when-clear      Stop once every threat is neutralized\n\
       --report <path>        Write the final state as JSON\n\
     \n\
     Set RUST_LOG=debug for per-hit engine logging.\n"
}

/// Parse everything after the program name.
pub fn parse(args: &[String]) -> Result<Command, AppError> {
    let Some((command, rest)) = args.split_first() else {
        return Err(AppError::Usage("missing command".into()));
    };

    match command.as_str() {
        "run" => parse_run(rest),
        "raid" => parse_raid(rest),
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => Err(AppError::Usage(format!("unknown command: {other}"))),
    }
}

fn parse_run(args: &[String]) -> Result<Command, AppError> {
    let mut scenario = None;
    let mut threats = Vec::new();
    let mut options = RunOptions::default();

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        if parse_common(flag, &mut iter, &mut options)? {
            continue;
        }
        match flag.as_str() {
            "--scenario" => scenario = Some(PathBuf::from(value(flag, iter.next())?)),
            "--threat" => threats.push(parse_threat(value(flag, iter.next())?)?),
            other => return Err(AppError::Usage(format!("unknown option for run: {other}"))),
        }
    }

    if scenario.is_none() && threats.is_empty() {
        return Err(AppError::Usage(
            "run needs --scenario or at least one --threat".into(),
        ));
    }
    Ok(Command::Run {
        scenario,
        threats,
        options,
    })
}

fn parse_raid(args: &[String]) -> Result<Command, AppError> {
    let mut seed = 42;
    let mut params = RaidParams::default();
    let mut options = RunOptions::default();

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        if parse_common(flag, &mut iter, &mut options)? {
            continue;
        }
        match flag.as_str() {
            "--count" => params.count = parse_number(flag, iter.next())?,
            "--seed" => seed = parse_number(flag, iter.next())?,
            "--radius" => params.radius = parse_number(flag, iter.next())?,
            "--min-speed" => params.min_speed = parse_number(flag, iter.next())?,
            "--max-speed" => params.max_speed = parse_number(flag, iter.next())?,
            other => return Err(AppError::Usage(format!("unknown option for raid: {other}"))),
        }
    }

    Ok(Command::Raid {
        seed,
        params,
        options,
    })
}

/// Consume a common option. Returns false if `flag` is not one.
fn parse_common<'a>(
    flag: &str,
    iter: &mut impl Iterator<Item = &'a String>,
    options: &mut RunOptions,
) -> Result<bool, AppError> {
    match flag {
        "--dt" => options.dt = Some(parse_number(flag, iter.next())?),
        "--duration" => options.duration = Some(parse_number(flag, iter.next())?),
        "--report" => options.report = Some(PathBuf::from(value(flag, iter.next())?)),
        "--realtime" => options.realtime = true,
        "--stop-when-clear" => options.stop_when_clear = true,
        _ => return Ok(false),
    }
    Ok(true)
}

fn value<'a>(flag: &str, next: Option<&'a String>) -> Result<&'a str, AppError> {
    next.map(String::as_str)
        .ok_or_else(|| AppError::Usage(format!("{flag} needs a value")))
}

fn parse_number<T: std::str::FromStr>(flag: &str, next: Option<&String>) -> Result<T, AppError> {
    let raw = value(flag, next)?;
    raw.parse()
        .map_err(|_| AppError::Usage(format!("{flag}: not a number: {raw}")))
}

/// Parse `x,y,vx,vy`.
fn parse_threat(raw: &str) -> Result<ThreatSpec, AppError> {
    let parts: Vec<f64> = raw
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| AppError::Usage(format!("--threat: not a number list: {raw}")))?;
    match parts.as_slice() {
        [x, y, vx, vy] => Ok(ThreatSpec::new(DVec2::new(*x, *y), DVec2::new(*vx, *vy))),
        _ => Err(AppError::Usage(format!(
            "--threat expects x,y,vx,vy, got {raw}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_parse_run_threats() {
        let cmd = parse(&args("run --threat 0,300,0,0 --threat -150,350,15,-10 --dt 0.02")).unwrap();
        let Command::Run {
            scenario,
            threats,
            options,
        } = cmd
        else {
            panic!("expected run");
        };
        assert!(scenario.is_none());
        assert_eq!(threats.len(), 2);
        assert_eq!(threats[1].velocity, DVec2::new(15.0, -10.0));
        assert_eq!(options.dt, Some(0.02));
        assert!(!options.realtime);
    }

    #[test]
    fn test_parse_raid_defaults_and_overrides() {
        let cmd = parse(&args("raid --count 9 --seed 7 --realtime --report out.json")).unwrap();
        let Command::Raid {
            seed,
            params,
            options,
        } = cmd
        else {
            panic!("expected raid");
        };
        assert_eq!(seed, 7);
        assert_eq!(params.count, 9);
        assert_eq!(params.radius, RaidParams::default().radius);
        assert!(options.realtime);
        assert_eq!(options.report, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse(&[]), Err(AppError::Usage(_))));
        assert!(matches!(parse(&args("launch")), Err(AppError::Usage(_))));
        assert!(matches!(parse(&args("run")), Err(AppError::Usage(_))));
        assert!(matches!(parse(&args("run --threat 1,2,3")), Err(AppError::Usage(_))));
        assert!(matches!(parse(&args("raid --count many")), Err(AppError::Usage(_))));
        assert!(matches!(parse(&args("run --scenario")), Err(AppError::Usage(_))));
        assert_eq!(parse(&args("--help")).unwrap(), Command::Help);
    }
}
