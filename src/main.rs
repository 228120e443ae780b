use std::io::{self, BufRead};

use calc::interpreter::{
    config::{self, EvalConfig, ExponentMode},
    session::Session,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// calc evaluates arithmetic expressions such as `2 + 3 * 4` or `7 / 2`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Compute `**` as mathematical exponentiation instead of by repeated
    /// squaring.
    #[arg(long)]
    standard_pow: bool,

    /// Size in bytes of the arena holding each line's tokens and tree.
    #[arg(long, default_value_t = config::TRANSIENT_CAPACITY)]
    transient_capacity: usize,

    /// Size in bytes of the arena holding the line buffers.
    #[arg(long, default_value_t = config::PERMANENT_CAPACITY)]
    permanent_capacity: usize,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Expression to evaluate. Without it, every line read from stdin is
    /// evaluated.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = EvalConfig { permanent_capacity: args.permanent_capacity,
                              transient_capacity: args.transient_capacity,
                              exponent: if args.standard_pow {
                                  ExponentMode::Standard
                              } else {
                                  ExponentMode::Squaring
                              },
                              ..EvalConfig::default() };

    let mut session = Session::new(config).unwrap_or_else(|e| {
                                              eprintln!("{e}");
                                              std::process::exit(1);
                                          });

    if let Some(expression) = args.expression {
        if let Some(output) = session.render(&expression) {
            println!("{output}");
        }
        return;
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read from stdin: {e}");
                std::process::exit(1);
            },
        };

        if let Some(output) = session.render(line.trim_end()) {
            println!("{output}");
        }
    }
}

/// Sends log records to stderr, keeping stdout for results.
///
/// `RUST_LOG` takes precedence over the verbosity flag.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}
