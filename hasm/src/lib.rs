//! Two-pass assembler for the Hack 16-bit machine.
//!
//! Source text flows through [`lex`] (line cleanup), [`parse`] (label
//! binding) and [`encode`] (operand resolution and bit packing).

pub mod encode;
pub mod error;
pub mod lex;
pub mod parse;
pub mod symbol;
pub mod tables;

pub type Address = u16;

pub use self::encode::{second_pass, Word};
pub use self::error::{AsmError, ErrorKind};
pub use self::parse::{first_pass, Instruction, Program};
pub use self::symbol::SymbolTable;

/// Translates a whole source file into machine words, one per instruction.
///
/// Stops at the first error of either pass.
pub fn assemble(src: &str) -> Result<Vec<Word>, AsmError> {
    let program = first_pass(src)?;
    second_pass(program)
}
