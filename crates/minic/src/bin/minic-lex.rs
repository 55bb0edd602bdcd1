//! Dumps the token stream of a source file, one token per line.

use std::path::PathBuf;

use anyhow::Context;
use libminic::syntax::Lexer;
use tracing_subscriber::EnvFilter;

const DEFAULT_SOURCE: &str = "input.txt";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_SOURCE), PathBuf::from);
    let source = libminic::read_source(&path)
        .with_context(|| format!("cannot tokenize {}", path.display()))?;

    for token in Lexer::from_source(&source).tokens() {
        println!("Token: {:<15} Text: {}", token.kind, token.text);
    }
    Ok(())
}
