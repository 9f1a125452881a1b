//! Demonstration of a scripted trip running through the tracker

use trip_telemetry::{
    CsvFormatter, JsonFormatter, Position, Sample, SampleSource, ScriptedSource, TextFormatter,
    TripTracker,
};

fn main() {
    println!("=== Trip Telemetry - Replay Demo ===\n");

    // A short drive: accelerate east along the equatorial meridian,
    // cruise, then brake. One sample every five seconds.
    let samples = vec![
        Sample::new(0, Position::new(0.0, 0.0000), 0.0),
        Sample::new(5_000, Position::new(0.0, 0.0004), 8.0),
        Sample::new(10_000, Position::new(0.0, 0.0012), 18.0),
        Sample::new(15_000, Position::new(0.0, 0.0024), 27.0),
        Sample::new(20_000, Position::new(0.0, 0.0036), 27.0),
        Sample::new(25_000, Position::new(0.0, 0.0046), 16.0),
        Sample::new(30_000, Position::new(0.0, 0.0050), 4.0),
    ];

    let mut source = ScriptedSource::new(samples);
    let mut tracker = TripTracker::with_speed_limit(90.0);
    let compact = TextFormatter { compact: true };

    tracker.start();
    println!("Live updates:");
    while let Some(sample) = source.next_sample() {
        tracker.ingest(sample);
        println!("  {}", compact.format_text(&tracker.snapshot()));
    }
    tracker.stop();

    let report = tracker.snapshot();

    println!("\nFinal report (text):");
    println!("{}", TextFormatter::new().format_text(&report));

    println!("Final report (JSON):");
    println!("{}\n", JsonFormatter::new().format_json(&report));

    println!("Final report (CSV):");
    println!("{}", CsvFormatter::new().format_csv_with_header(&report));
}
