use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
};

use clap::Parser;
use isolit::{DEFAULT_MAX_DEPTH, ErrorKind, EvalOptions, Grammar, parse_expression_with};
use tracing_subscriber::EnvFilter;

/// isolit evaluates a JSON or object-literal expression in an isolated scope
/// and prints the result as JSON.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells isolit to read the file named by CONTENTS instead of treating
    /// CONTENTS as the expression.
    #[arg(short, long)]
    file: bool,

    /// Accept strict JSON only.
    #[arg(short, long)]
    json: bool,

    /// Pretty-print the result.
    #[arg(short, long)]
    pretty: bool,

    /// Maximum nesting depth of the expression.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// The expression, or a file path with `--file`. Reads stdin when absent.
    contents: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();

    let source = match read_source(&args) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read input: {e}");
            return ExitCode::FAILURE;
        },
    };

    let options = EvalOptions { grammar:   if args.json { Grammar::Json } else { Grammar::Relaxed },
                                max_depth: args.max_depth, };

    match parse_expression_with(&source, &options) {
        Ok(value) => {
            if args.pretty {
                match serde_json::to_string_pretty(&serde_json::Value::from(&value)) {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        eprintln!("Failed to render result: {e}");
                        return ExitCode::FAILURE;
                    },
                }
            } else {
                println!("{value}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            match e.kind() {
                ErrorKind::Syntax => ExitCode::from(1),
                ErrorKind::Reference => ExitCode::from(2),
            }
        },
    }
}

fn read_source(args: &Args) -> io::Result<String> {
    match &args.contents {
        Some(path) if args.file => fs::read_to_string(path),
        Some(expression) => Ok(expression.clone()),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        },
    }
}
