//! yarhl command-line interface.
//!
//! Tokenizes rule files and reports counters and diagnostics the way the
//! rule editor shows them.

use std::sync::Once;

mod commands;

use commands::{check_file, count_file, parse_options, tokenize_file, CommandOptions};

static TRACING_INIT: Once = Once::new();

/// Install a subscriber when `RUST_LOG` is set. `YARHL_LOG_TREE=1` switches
/// to an indented span tree.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let tree = std::env::var_os("YARHL_LOG_TREE").is_some();
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(tree.then(|| tracing_tree::HierarchicalLayer::new(2).with_targets(true)))
            .with((!tree).then(|| {
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
            }))
            .with(filter)
            .init();
    });
}

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(2);
    }

    let command = args[1].as_str();
    match command {
        "tokens" | "counts" | "check" => {
            let options = match parse_options(&args[2..]) {
                Ok(options) => options,
                Err(message) => {
                    eprintln!("error: {message}");
                    eprintln!("Usage: yarhl {command} <file> [options]");
                    std::process::exit(2);
                }
            };
            let code = run(command, &options);
            std::process::exit(code);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("yarhl {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    }
}

fn run(command: &str, options: &CommandOptions) -> i32 {
    let result = match command {
        "tokens" => tokenize_file(options),
        "counts" => count_file(options),
        _ => check_file(options),
    };
    match result {
        Ok(outcome) => {
            print!("{}", outcome.stdout);
            outcome.code
        }
        Err(message) => {
            eprintln!("{message}");
            1
        }
    }
}

fn print_usage() {
    println!("yarhl: tokenizer and checker for YARA-style rules");
    println!();
    println!("Usage: yarhl <command> <file> [options]");
    println!();
    println!("Commands:");
    println!("  tokens <file>    Print every token with its classification and style");
    println!("  counts <file>    Print identifier, variable and warning counters per line");
    println!("  check <file>     Report undeclared variables (exit 1 if any)");
    println!("  help             Show this help message");
    println!("  version          Show version information");
    println!();
    println!("Options:");
    println!("  --json           Emit JSON instead of text (tokens, counts)");
    println!("  --no-trivia      Omit whitespace-only plain tokens (tokens)");
    println!();
    println!("Set RUST_LOG=yarhl_highlight=debug to trace the scan.");
}
