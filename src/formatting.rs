//! Trip report output formatting
//!
//! Renders a `TripReport` for whatever display surface is attached: a
//! human-readable block for terminals, JSON for structured consumers, and
//! CSV rows for logging a report per update.

use crate::tracker::TripReport;
use serde::{Deserialize, Serialize};

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable multi-line text
    Text,
    /// JSON object with all report fields
    Json,
    /// Single CSV row (optionally preceded by a header)
    Csv,
}

impl OutputFormat {
    /// Parse a format name as given on a command line
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

/// Render a report in the requested format
pub fn render_report(report: &TripReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => TextFormatter::new().format_text(report),
        OutputFormat::Json => JsonFormatter::new().format_json(report),
        OutputFormat::Csv => CsvFormatter::new().format_csv_with_header(report),
    }
}

/// Human-readable text formatter
///
/// Speeds are shown as whole km/h, distance with two decimals in km and
/// acceleration with two decimals in m/s², matching a typical dashboard
/// readout.
pub struct TextFormatter {
    /// Use a single-line compact format
    pub compact: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self { compact: false }
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Format a report as human-readable text
    pub fn format_text(&self, report: &TripReport) -> String {
        let status = if report.active { "active" } else { "stopped" };
        let limit = if report.over_limit { " OVER LIMIT" } else { "" };

        if self.compact {
            return format!(
                "{} km/h (max {}, avg {}) | {:.2} km | {:.2} m/s² | {}{}",
                report.current_speed_kmh as i64,
                report.max_speed_kmh as i64,
                report.average_speed_kmh as i64,
                report.distance_km,
                report.max_acceleration_ms2,
                status,
                limit
            );
        }

        let mut output = String::new();
        output.push_str(&format!("Trip ({}{})\n", status, limit));
        output.push_str(&format!("  Speed:            {} km/h\n", report.current_speed_kmh as i64));
        output.push_str(&format!("  Max speed:        {} km/h\n", report.max_speed_kmh as i64));
        output.push_str(&format!("  Average speed:    {} km/h\n", report.average_speed_kmh as i64));
        output.push_str(&format!("  Distance:         {:.2} km\n", report.distance_km));
        output.push_str(&format!("  Max acceleration: {:.2} m/s²\n", report.max_acceleration_ms2));
        output
    }
}

/// JSON formatter for structured consumers
pub struct JsonFormatter {
    /// Pretty-print the output
    pub pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Format a report as JSON
    ///
    /// `TripReport` has no non-serializable fields, so serialization
    /// cannot fail; a formatter error degrades to an empty object.
    pub fn format_json(&self, report: &TripReport) -> String {
        let result = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        result.unwrap_or_else(|_| "{}".to_string())
    }
}

/// CSV formatter for logging one row per report
pub struct CsvFormatter {
    /// Include header row
    pub include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self {
            include_header: true,
        }
    }
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// CSV header matching `format_csv` columns
    pub fn header(&self) -> String {
        "current_speed_kmh,max_speed_kmh,average_speed_kmh,distance_km,max_acceleration_ms2,over_limit,active".to_string()
    }

    /// Format a report as a single CSV row
    pub fn format_csv(&self, report: &TripReport) -> String {
        format!(
            "{:.1},{:.1},{:.1},{:.3},{:.2},{},{}",
            report.current_speed_kmh,
            report.max_speed_kmh,
            report.average_speed_kmh,
            report.distance_km,
            report.max_acceleration_ms2,
            report.over_limit,
            report.active
        )
    }

    /// Format a report as CSV, with the header row when configured
    pub fn format_csv_with_header(&self, report: &TripReport) -> String {
        if self.include_header {
            format!("{}\n{}", self.header(), self.format_csv(report))
        } else {
            self.format_csv(report)
        }
    }
}
