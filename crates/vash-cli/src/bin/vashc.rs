#![allow(clippy::print_stderr)]

use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;

use vash_cli::args::CliArgs;
use vash_cli::driver;
use vash_cli::reporter::Reporter;

fn main() -> ExitCode {
    // Zero cost unless VASH_LOG or RUST_LOG is set.
    vash_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let reporter = Reporter::new(std::io::stderr().is_terminal());

    match driver::run(&args) {
        Ok(outputs) => {
            if args.trace {
                for output in &outputs {
                    eprintln!("{}", reporter.format_trace(&output.name, &output.trace));
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", reporter.format_error(&err));
            ExitCode::FAILURE
        }
    }
}
