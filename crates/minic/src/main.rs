use std::path::PathBuf;
use std::process::ExitCode;

use libminic::{Error, render};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_SOURCE: &str = "input.txt";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_SOURCE), PathBuf::from);
    info!(path = %path.display(), "compiling");

    match libminic::compile_file(&path) {
        Ok(program) => {
            print!("{}", render(&program));
            ExitCode::SUCCESS
        }
        Err(Error::Syntax(err)) => {
            debug!(expected = err.expected, found = %err.found, "rejected source");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            ExitCode::FAILURE
        }
    }
}
