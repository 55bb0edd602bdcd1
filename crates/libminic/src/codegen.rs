//! Lowers a statement tree to accumulator pseudo-assembly.

use std::fmt;

use itertools::Itertools;
use minic_syntax::{AstNode, NodeKind};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    /// Put the operand in the accumulator.
    Load,
    /// Copy the accumulator into the named variable.
    Store,
    /// Add the operand to the accumulator.
    Add,
}

impl Mnemonic {
    pub fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Load => "LOAD",
            Mnemonic::Store => "STORE",
            Mnemonic::Add => "ADD",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub mnemonic: Mnemonic,
    pub operand: String,
}

impl Instruction {
    pub fn new(mnemonic: Mnemonic, operand: impl Into<String>) -> Self {
        Instruction {
            mnemonic,
            operand: operand.into(),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.mnemonic, self.operand)
    }
}

pub fn generate(root: &AstNode) -> Vec<Instruction> {
    let mut out = Vec::new();
    emit(root, &mut out);
    out
}

fn emit(node: &AstNode, out: &mut Vec<Instruction>) {
    match node.kind() {
        NodeKind::Number => push(out, Mnemonic::Load, node.value()),
        NodeKind::Assign => {
            if let Some(value) = node.right() {
                emit(value, out);
            }
            // the target is read directly, never lowered
            if let Some(target) = node.left() {
                push(out, Mnemonic::Store, target.value());
            }
        }
        NodeKind::Plus => {
            if let Some(lhs) = node.left() {
                emit(lhs, out);
            }
            if let Some(rhs) = node.right() {
                push(out, Mnemonic::Add, rhs.value());
            }
        }
        NodeKind::Identifier => {}
    }
}

fn push(out: &mut Vec<Instruction>, mnemonic: Mnemonic, operand: &str) {
    let instruction = Instruction::new(mnemonic, operand);
    trace!(%instruction, "emit");
    out.push(instruction);
}

/// One instruction per line, each terminated by a newline.
pub fn render(instructions: &[Instruction]) -> String {
    instructions
        .iter()
        .format_with("", |instruction, f| f(&format_args!("{instruction}\n")))
        .to_string()
}
