//! Lint tool for Cypher queries.
//!
//! Reads Cypher from standard input, reports parse errors on standard error
//! and optionally dumps the AST to standard output. Exits 0 when at least
//! one directive parsed, 1 when none did, 2 on usage errors.

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use cypher_parser::{Colorization, ParseConfig, parse_stream};

#[derive(Debug, Parser)]
#[command(
    name = "cypher-lint",
    about = "Parse Cypher from standard input and report errors",
    disable_version_flag = true
)]
struct Args {
    /// Dump the AST to stdout
    #[arg(short = 'a', long)]
    ast: bool,

    /// Colorize output using ANSI escape sequences
    #[arg(long)]
    colorize: bool,

    /// Attempt to limit output to the specified width
    #[arg(long, value_name = "N", default_value_t = 0)]
    output_width: usize,

    /// Output the version of cypher-lint and cypher-parser
    #[arg(long)]
    version: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.version {
        println!("cypher-lint: {}", env!("CARGO_PKG_VERSION"));
        println!("cypher-parser: {}", cypher_parser::version());
        return ExitCode::SUCCESS;
    }

    let colorize_output = args.colorize || io::stdout().is_terminal();
    let colorize_errors = args.colorize || io::stderr().is_terminal();

    let config = ParseConfig::new().with_error_colorization(if colorize_errors {
        Colorization::ANSI
    } else {
        Colorization::NONE
    });

    let result = match parse_stream(io::stdin().lock(), &config) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("cypher-lint: {err}");
            return ExitCode::FAILURE;
        }
    };

    if result.render_errors(&mut io::stderr().lock()).is_err() {
        return ExitCode::FAILURE;
    }

    if args.ast {
        let colors = if colorize_output {
            Colorization::ANSI
        } else {
            Colorization::NONE
        };
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let printed = result
            .printer()
            .width(args.output_width)
            .colorization(colors)
            .print(&mut out)
            .and_then(|()| out.flush());
        if let Err(err) = printed {
            eprintln!("cypher-lint: {err}");
            return ExitCode::FAILURE;
        }
    }

    if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
