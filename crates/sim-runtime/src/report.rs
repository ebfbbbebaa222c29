//! # Report Output
//!
//! Text report for people, JSON for tooling. Both write to any `io::Write`.

use crate::runner::RunOutput;
use chrono::{Local, TimeZone};
use nv_06_evaluation::Metrics;
use serde::Serialize;
use shared_types::{GroundTruthLabel, Timestamp};
use std::io::{self, Write};

const RULE_WIDTH: usize = 50;
const KEY_PREVIEW_CHARS: usize = 12;
const CONTENT_PREVIEW_CHARS: usize = 60;

#[derive(Serialize)]
struct PopulationSummary {
    total: usize,
    legit: usize,
    malicious: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    population: PopulationSummary,
    metrics: &'a Metrics,
    attack_detection_rate: f64,
}

fn summary(output: &RunOutput) -> PopulationSummary {
    PopulationSummary {
        total: output.population.len(),
        legit: output.population.legit_count(),
        malicious: output.population.malicious_count(),
    }
}

/// Write the metrics as one pretty-printed JSON document.
pub fn write_json_report<W: Write>(out: &mut W, output: &RunOutput) -> io::Result<()> {
    let metrics = &output.evaluation.metrics;
    let report = JsonReport {
        population: summary(output),
        metrics,
        attack_detection_rate: metrics.attack_detection_rate(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}

/// Write the full text report with `samples` activity lines per class.
pub fn write_text_report<W: Write>(
    out: &mut W,
    output: &RunOutput,
    samples: usize,
) -> io::Result<()> {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let population = summary(output);
    let m = &output.evaluation.metrics;
    let c = &m.confusion;

    writeln!(out, "\nSystem Summary:")?;
    writeln!(out, "- Total Users: {}", population.total)?;
    writeln!(out, "- Legitimate Users: {}", population.legit)?;
    writeln!(out, "- Malicious Users: {}", population.malicious)?;

    writeln!(out, "\n{heavy}")?;
    writeln!(out, "Total Verifications: {}", c.total())?;
    writeln!(out, "Avg Verification Time: {:.4} ms", m.latency.mean_ms)?;
    writeln!(
        out,
        "Min/Max Verification Time: {:.4}/{:.4} ms",
        m.latency.min_ms, m.latency.max_ms
    )?;
    writeln!(out, "{light}")?;
    writeln!(out, "True Positives (Legit Accepted): {}", c.true_positives)?;
    writeln!(out, "False Positives (Malicious Accepted): {}", c.false_positives)?;
    writeln!(out, "True Negatives (Malicious Rejected): {}", c.true_negatives)?;
    writeln!(out, "False Negatives (Legit Rejected): {}", c.false_negatives)?;
    writeln!(out, "{light}")?;
    writeln!(out, "Accuracy: {:.2}%", m.accuracy)?;
    writeln!(out, "Precision: {:.2}%", m.precision)?;
    writeln!(out, "Recall: {:.2}%", m.recall)?;
    writeln!(out, "F1 Score: {:.2}%", m.f1_score)?;
    writeln!(out, "{light}")?;
    writeln!(out, "Tamper Strategy Breakdown:")?;
    for tally in &m.by_strategy {
        writeln!(
            out,
            "- {}: applied {}, rejected {} ({:.2}%)",
            tally.strategy.name(),
            tally.applied,
            tally.rejected,
            tally.detection_rate()
        )?;
    }
    writeln!(out, "{heavy}")?;

    write_samples(out, output, samples)?;

    writeln!(out, "\nPerformance Metrics:")?;
    writeln!(out, "- Average Verification Time: {:.4} ms", m.latency.mean_ms)?;
    writeln!(out, "- System Accuracy: {:.2}%", m.accuracy)?;
    writeln!(out, "- Detection Precision: {:.2}%", m.precision)?;
    writeln!(out, "- Attack Detection Rate: {:.2}%", m.attack_detection_rate())?;

    Ok(())
}

fn write_samples<W: Write>(out: &mut W, output: &RunOutput, samples: usize) -> io::Result<()> {
    let heavy = "=".repeat(RULE_WIDTH);

    writeln!(out, "\n{heavy}")?;
    writeln!(out, "User Activity Report Samples")?;
    writeln!(out, "{heavy}")?;

    for (title, label) in [
        ("Legitimate User Activities", GroundTruthLabel::Legit),
        ("Malicious User Activities", GroundTruthLabel::Malicious),
    ] {
        writeln!(out, "\n{title}:")?;
        for index in output.population.sample_indices(label, samples) {
            write_activity(out, output, index)?;
        }
    }

    Ok(())
}

fn write_activity<W: Write>(out: &mut W, output: &RunOutput, index: usize) -> io::Result<()> {
    let population = &output.population;
    let (Some(actor), Some(event)) = (
        population.actors().get(index),
        population.events().get(index),
    ) else {
        return Ok(());
    };
    let valid = output
        .evaluation
        .items
        .get(index)
        .is_some_and(|item| item.outcome.is_valid());

    writeln!(
        out,
        "- User: {} | Key: {}...",
        actor.profile.display_name,
        preview(&actor.identity.public_key_hex, KEY_PREVIEW_CHARS, "")
    )?;
    writeln!(
        out,
        "  Content: {}",
        preview(&event.content, CONTENT_PREVIEW_CHARS, "...")
    )?;
    writeln!(out, "  Signature Valid: {valid}")?;
    writeln!(out, "  Created At: {}", format_ctime(event.created_at))
}

/// First `max_chars` characters, followed by `ellipsis` if anything was cut.
pub fn preview(text: &str, max_chars: usize, ellipsis: &str) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ellipsis}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Local time in `ctime` layout, e.g. `Tue Nov 14 22:13:20 2023`.
///
/// Falls back to the raw number for timestamps chrono cannot represent.
pub fn format_ctime(created_at: Timestamp) -> String {
    i64::try_from(created_at)
        .ok()
        .and_then(|secs| Local.timestamp_opt(secs, 0).single())
        .map(|dt| dt.format("%a %b %e %H:%M:%S %Y").to_string())
        .unwrap_or_else(|| created_at.to_string())
}
