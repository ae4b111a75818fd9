//! `yarhl tokens`: dump the token stream.

use std::fmt::Write;

use serde::Serialize;
use yarhl_highlight::style::style_name;
use yarhl_highlight::{highlight, HighlightOptions, Highlighted};

use super::{class_names, read_source, CommandOptions, Outcome};

#[derive(Serialize)]
struct LineJson<'a> {
    line: usize,
    tokens: Vec<TokenJson<'a>>,
}

#[derive(Serialize)]
struct TokenJson<'a> {
    column: usize,
    text: &'a str,
    class: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<&'static str>,
}

pub fn tokenize_file(options: &CommandOptions) -> Result<Outcome, String> {
    let source = read_source(options)?;
    let highlight_options = HighlightOptions::default().with_trivia(!options.no_trivia);
    let result = highlight(&source, highlight_options);

    let stdout = if options.json {
        render_json(&result).map_err(|e| format!("error writing JSON: {e}"))?
    } else {
        render_text(&result)
    };
    Ok(Outcome::success(stdout))
}

/// One token per output line: `line:column  CLASSES  style  "text"`.
pub(super) fn render_text(result: &Highlighted) -> String {
    let mut out = String::new();
    for (index, tokens) in result.lines.iter().enumerate() {
        for token in tokens {
            let _ = writeln!(
                out,
                "{}:{}\t{}\t{}\t{:?}",
                index + 1,
                token.column + 1,
                class_names(token.class).join("|"),
                style_name(token.class).unwrap_or("-"),
                token.text
            );
        }
    }
    out
}

pub(super) fn render_json(result: &Highlighted) -> Result<String, serde_json::Error> {
    let lines: Vec<LineJson<'_>> = result
        .lines
        .iter()
        .enumerate()
        .map(|(index, tokens)| LineJson {
            line: index + 1,
            tokens: tokens
                .iter()
                .map(|token| TokenJson {
                    column: token.column + 1,
                    text: &token.text,
                    class: class_names(token.class),
                    style: style_name(token.class),
                })
                .collect(),
        })
        .collect();
    let mut json = serde_json::to_string_pretty(&lines)?;
    json.push('\n');
    Ok(json)
}
