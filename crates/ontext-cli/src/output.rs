//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use ontext_domain::Year;
use ontext_periods::{MatchKind, ReconciledRecord};
use ontext_temporal::{DriftResult, SnapshotMap, TemporalReport};
use std::collections::BTreeSet;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Semantic-field terms shown per row in tables.
const TABLE_FIELD_TERMS: usize = 5;

/// Longest definition or excerpt shown in a table cell.
const TABLE_TEXT_CHARS: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format per-period snapshots.
    pub fn format_snapshots(&self, snapshots: &SnapshotMap) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(snapshots)?),
            OutputFormat::Table => Ok(self.snapshots_table(snapshots)),
        }
    }

    /// Format a drift result.
    pub fn format_drift(&self, drift: &DriftResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(drift)?),
            OutputFormat::Table => Ok(self.drift_table(drift)),
        }
    }

    /// Format a full report, optionally without its narrative.
    pub fn format_report(
        &self,
        report: &TemporalReport,
        include_narrative: bool,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let mut value = serde_json::to_value(report)?;
                if !include_narrative {
                    if let Some(object) = value.as_object_mut() {
                        object.remove("narrative");
                    }
                }
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let mut sections = vec![
                    self.heading(&format!("Term: {}", report.term)),
                    self.snapshots_table(&report.snapshots),
                    self.drift_table(&report.drift),
                ];
                if include_narrative {
                    sections.push(self.heading("Narrative"));
                    sections.push(report.narrative.clone());
                }
                Ok(sections.join("\n\n"))
            }
        }
    }

    /// Format reconciled records.
    pub fn format_reconciled(&self, records: &[ReconciledRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
            OutputFormat::Table => Ok(self.reconciled_table(records)),
        }
    }

    /// Format a list of analysis periods.
    pub fn format_periods(&self, periods: &[Year]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(periods)?),
            OutputFormat::Table => {
                if periods.is_empty() {
                    return Ok(self.colorize("No periods.", Color::Yellow));
                }
                let years: Vec<String> = periods.iter().map(|year| year.to_string()).collect();
                Ok(years.join(","))
            }
        }
    }

    fn snapshots_table(&self, snapshots: &SnapshotMap) -> String {
        if snapshots.is_empty() {
            return self.colorize("No periods analysed.", Color::Yellow);
        }

        let mut builder = Builder::default();
        builder.push_record([
            "Period",
            "Docs",
            "Frequency",
            "Status",
            "Semantic field",
            "Definition",
        ]);

        for snapshot in snapshots.values() {
            let field: Vec<&str> = snapshot
                .semantic_field
                .iter()
                .take(TABLE_FIELD_TERMS)
                .map(String::as_str)
                .collect();
            builder.push_record([
                snapshot.period.to_string(),
                snapshot.document_count.to_string(),
                snapshot.frequency.to_string(),
                snapshot.evolution_status.to_string(),
                field.join(", "),
                shorten(&snapshot.definition, TABLE_TEXT_CHARS),
            ]);
        }

        self.render(builder)
    }

    fn drift_table(&self, drift: &DriftResult) -> String {
        if drift.periods.is_empty() {
            return self.colorize(
                "Fewer than two periods have data; no drift computed.",
                Color::Yellow,
            );
        }

        let mut builder = Builder::default();
        builder.push_record(["Periods", "Similarity", "Drift", "New", "Lost", "Stable"]);

        for record in drift.periods.values() {
            builder.push_record([
                record.key(),
                format!("{:.2}", record.similarity),
                format!("{:.2}", record.drift_score),
                join_set(&record.new_terms),
                join_set(&record.lost_terms),
                join_set(&record.stable_terms),
            ]);
        }

        let summary = format!(
            "Average drift: {:.3}  Total drift: {:.3}  Stable terms: {}",
            drift.average_drift,
            drift.total_drift,
            if drift.stable_terms.is_empty() {
                "none".to_string()
            } else {
                join_set(&drift.stable_terms)
            }
        );

        format!("{}\n{}", self.render(builder), self.colorize(&summary, Color::Cyan))
    }

    fn reconciled_table(&self, records: &[ReconciledRecord]) -> String {
        if records.is_empty() {
            return self.colorize("No records found.", Color::Yellow);
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Interval", "Matched", "Match", "Excerpt"]);

        for record in records {
            let matched: Vec<String> = record
                .period_match
                .matched_years
                .iter()
                .map(|year| year.to_string())
                .collect();
            builder.push_record([
                record.index.to_string(),
                record.interval.clone(),
                if matched.is_empty() { "-".to_string() } else { matched.join(", ") },
                match_kind_label(&record.period_match.kind),
                shorten(&record.excerpt, TABLE_TEXT_CHARS),
            ]);
        }

        self.render(builder)
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn heading(&self, text: &str) -> String {
        if self.color_enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), Color::Green)
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), Color::Yellow)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: Color) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        text.color(color).to_string()
    }
}

/// Short label for how a record was matched.
pub fn match_kind_label(kind: &MatchKind) -> String {
    match kind {
        MatchKind::Direct => "direct".to_string(),
        MatchKind::Nearest { distance } => format!("nearest ({:.1}y)", distance),
        MatchKind::OutOfRange { nearest, distance } => {
            format!("out of range ({} at {:.1}y)", nearest, distance)
        }
        MatchKind::Undated => "undated".to_string(),
        MatchKind::NoTargets => "no targets".to_string(),
    }
}

fn join_set(terms: &BTreeSet<String>) -> String {
    terms.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn shorten(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
