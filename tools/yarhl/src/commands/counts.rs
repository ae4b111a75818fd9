//! `yarhl counts`: counters as the editor shows them, line by line.

use std::fmt::Write;

use serde::Serialize;
use yarhl_highlight::{highlight, Counts, HighlightOptions, Highlighted};

use super::{read_source, CommandOptions, Outcome};

#[derive(Serialize)]
struct CountsJson {
    identifiers: usize,
    variables: usize,
    warnings: usize,
}

impl From<Counts> for CountsJson {
    fn from(counts: Counts) -> Self {
        CountsJson {
            identifiers: counts.identifiers,
            variables: counts.variables,
            warnings: counts.warnings,
        }
    }
}

#[derive(Serialize)]
struct LineCountsJson {
    line: usize,
    #[serde(flatten)]
    counts: CountsJson,
}

#[derive(Serialize)]
struct DocumentCountsJson {
    lines: Vec<LineCountsJson>,
    total: CountsJson,
}

pub fn count_file(options: &CommandOptions) -> Result<Outcome, String> {
    let source = read_source(options)?;
    let result = highlight(&source, HighlightOptions::default().with_diagnostics(false));

    let stdout = if options.json {
        render_json(&result).map_err(|e| format!("error writing JSON: {e}"))?
    } else {
        render_text(&result)
    };
    Ok(Outcome::success(stdout))
}

fn format_counts(counts: Counts) -> String {
    format!(
        "identifiers={} variables={} warnings={}",
        counts.identifiers, counts.variables, counts.warnings
    )
}

/// Counters at the start of each line, then the totals.
pub(super) fn render_text(result: &Highlighted) -> String {
    let mut out = String::new();
    for (index, counts) in result.line_counts.iter().enumerate() {
        let _ = writeln!(out, "{}\t{}", index + 1, format_counts(*counts));
    }
    let _ = writeln!(out, "total\t{}", format_counts(result.counts));
    out
}

pub(super) fn render_json(result: &Highlighted) -> Result<String, serde_json::Error> {
    let document = DocumentCountsJson {
        lines: result
            .line_counts
            .iter()
            .enumerate()
            .map(|(index, counts)| LineCountsJson {
                line: index + 1,
                counts: (*counts).into(),
            })
            .collect(),
        total: result.counts.into(),
    };
    let mut json = serde_json::to_string_pretty(&document)?;
    json.push('\n');
    Ok(json)
}
