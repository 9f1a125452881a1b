//! Trip replay CLI
//!
//! Reads a JSON replay file of location samples, runs them through a
//! `TripTracker` and prints the final report.
//!
//! Usage: trip-telemetry <replay.json> [--config <config.json>]
//!        [--format text|json|csv] [--per-sample]

use std::env;
use std::process;

use trip_telemetry::{
    render_report, OutputFormat, SampleSource, SampleValidator, ScriptedSource, TrackerConfig,
    TripTracker,
};

struct Args {
    replay_path: String,
    config_path: Option<String>,
    format: Option<OutputFormat>,
    per_sample: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = env::args().skip(1);
    let mut replay_path = None;
    let mut config_path = None;
    let mut format = None;
    let mut per_sample = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                config_path = Some(args.next().ok_or("--config requires a path")?);
            }
            "--format" => {
                let name = args.next().ok_or("--format requires a value")?;
                format = Some(
                    OutputFormat::parse(&name)
                        .ok_or_else(|| format!("Unknown format '{}'", name))?,
                );
            }
            "--per-sample" => per_sample = true,
            other if other.starts_with("--") => {
                return Err(format!("Unknown option '{}'", other));
            }
            other => {
                if replay_path.replace(other.to_string()).is_some() {
                    return Err("Only one replay file may be given".to_string());
                }
            }
        }
    }

    Ok(Args {
        replay_path: replay_path.ok_or("Missing replay file argument")?,
        config_path,
        format,
        per_sample,
    })
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config_path {
        Some(path) => TrackerConfig::load_from_file(path)?,
        None => TrackerConfig::default(),
    };
    let format = args.format.unwrap_or(config.output_format);

    let mut source = ScriptedSource::from_json_file(&args.replay_path)?;
    let validator = SampleValidator::new(config.validation_config());
    let mut tracker = TripTracker::with_speed_limit(config.speed_limit_kmh);

    tracker.start();
    let mut prev = None;
    while let Some(raw) = source.next_sample() {
        if let Err(e) = validator.validate(&raw, prev.as_ref()) {
            eprintln!("Skipping sample at {} ms: {}", raw.timestamp_ms, e);
            continue;
        }
        let sample = validator.sanitize(raw);
        tracker.ingest(sample);
        prev = Some(sample);

        if args.per_sample {
            println!("{}", render_report(&tracker.snapshot(), format));
        }
    }
    tracker.stop();

    println!("{}", render_report(&tracker.snapshot(), format));
    Ok(())
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!(
                "Usage: trip-telemetry <replay.json> [--config <config.json>] \
                 [--format text|json|csv] [--per-sample]"
            );
            process::exit(2);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
