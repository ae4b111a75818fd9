//! Command handlers for the yarhl CLI.
//!
//! Each handler loads the file, runs the highlighter and renders its
//! output to a string. `main` owns printing and the process exit code.

use yarhl_highlight::{load_source, Classification};

mod check;
mod counts;
mod tokens;

pub use check::check_file;
pub use counts::count_file;
pub use tokens::tokenize_file;

/// Options shared by every command.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommandOptions {
    pub path: String,
    pub json: bool,
    pub no_trivia: bool,
}

/// What a command prints and the exit code it wants.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Outcome {
    pub stdout: String,
    pub code: i32,
}

impl Outcome {
    fn success(stdout: String) -> Self {
        Outcome { stdout, code: 0 }
    }
}

/// Parse the arguments after the command name.
///
/// Exactly one positional argument (the file) is required; flags may come
/// before or after it.
pub fn parse_options(args: &[String]) -> Result<CommandOptions, String> {
    let mut options = CommandOptions::default();
    let mut path = None;

    for arg in args {
        if arg == "--json" {
            options.json = true;
        } else if arg == "--no-trivia" {
            options.no_trivia = true;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    options.path = path.ok_or_else(|| "missing file path".to_owned())?;
    Ok(options)
}

/// Read the file named in `options`, rendering I/O failures as messages.
fn read_source(options: &CommandOptions) -> Result<String, String> {
    load_source(&options.path).map_err(|e| e.to_string())
}

/// Flag names of a classification, e.g. `["KEYWORD", "RULE_BODY"]`.
fn class_names(class: Classification) -> Vec<&'static str> {
    class.iter_names().map(|(name, _)| name).collect()
}
