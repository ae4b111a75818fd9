//! `yarhl check`: report diagnostics, exit 1 if there are any.

use std::fmt::Write;

use yarhl_highlight::{highlight, Diagnostic, HighlightOptions};

use super::{read_source, CommandOptions, Outcome};

#[tracing::instrument(level = "debug", skip_all, fields(path = %options.path))]
pub fn check_file(options: &CommandOptions) -> Result<Outcome, String> {
    let source = read_source(options)?;
    let options_for_scan = HighlightOptions::default().with_trivia(false);
    let result = highlight(&source, options_for_scan);

    Ok(Outcome {
        stdout: render_report(&options.path, &result.diagnostics),
        code: i32::from(!result.diagnostics.is_empty()),
    })
}

/// `path:line:column: warning: ...` per diagnostic, then a summary line.
pub(super) fn render_report(path: &str, diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for diag in diagnostics {
        let _ = writeln!(out, "{path}:{diag}");
    }
    match diagnostics.len() {
        0 => out.push_str("no warnings\n"),
        1 => out.push_str("1 warning\n"),
        n => {
            let _ = writeln!(out, "{n} warnings");
        }
    }
    out
}
