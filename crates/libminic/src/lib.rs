//! The minic pipeline: source text to pseudo-assembly.
//!
//! Parsing lives in [`minic_syntax`]; this crate lowers the tree and wires the
//! stages together behind [`compile`] and [`compile_file`].

pub mod codegen;

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;
use tracing::debug;

pub use codegen::{Instruction, Mnemonic, generate, render};
pub use minic_syntax as syntax;
pub use minic_syntax::{ParseResult, SyntaxError};

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Failed to open file {}", .path.display())]
    #[diagnostic(code(minic::source_unavailable))]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub fn compile(source: &str) -> ParseResult<Vec<Instruction>> {
    let ast = syntax::parse(source)?;
    Ok(generate(&ast))
}

/// Read a whole source, from standard input when `path` is `-`.
///
/// Bytes that are not valid UTF-8 become U+FFFD and lex as unknown tokens.
pub fn read_source(path: &Path) -> Result<String> {
    let unavailable = |source: io::Error| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let bytes = if path == Path::new(STDIN_PATH) {
        let mut bytes = Vec::new();
        io::stdin().read_to_end(&mut bytes).map_err(unavailable)?;
        bytes
    } else {
        std::fs::read(path).map_err(unavailable)?
    };

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn compile_file(path: &Path) -> Result<Vec<Instruction>> {
    let source = read_source(path)?;
    debug!(path = %path.display(), bytes = source.len(), "read source");
    Ok(compile(&source)?)
}
