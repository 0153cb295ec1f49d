use std::fmt;

use crate::error::{AsmError, ErrorKind};
use crate::parse::Program;
use crate::symbol::SymbolTable;
use crate::tables::{self, MAX_ADDRESS};
use crate::Address;

#[cfg(test)]
mod test;

const A_PREFIX: char = '@';
const COMMENT_BEGIN: &str = "//";
const C_PREFIX: u16 = 0b111 << 13;

/// One 16-bit machine word.
///
/// Displays as sixteen `0`/`1` characters, most significant bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word(pub u16);

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016b}", self.0)
    }
}

/// Resolves operands and encodes every instruction of `program`, in order.
///
/// Variables get their addresses here, in order of first use.
pub fn second_pass(program: Program<'_>) -> Result<Vec<Word>, AsmError> {
    let Program {
        instructions,
        mut symbols,
    } = program;
    let words = instructions
        .iter()
        .map(|ins| {
            let word = match ins.text.strip_prefix(A_PREFIX) {
                Some(operand) => encode_a(operand, &mut symbols),
                None => encode_c(ins.text),
            };
            word.map_err(|kind| AsmError::new(ins.line, kind))
        })
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(
        words = words.len(),
        variables = symbols.next_variable() - tables::VARIABLE_BASE,
        "second pass done"
    );
    Ok(words)
}

/// Encodes an A-instruction operand, the text after `@`.
///
/// All-digit operands are constants; anything else names a symbol, except an
/// empty operand or one with a comment glued on (`@i//x`).
pub fn encode_a(operand: &str, symbols: &mut SymbolTable) -> Result<Word, ErrorKind> {
    if operand.is_empty() || operand.contains(COMMENT_BEGIN) {
        return Err(ErrorKind::InvalidSymbol(operand.to_owned()));
    }
    let address = if operand.bytes().all(|b| b.is_ascii_digit()) {
        constant(operand)?
    } else {
        symbols.resolve_or_allocate_variable(operand)?
    };
    if address > MAX_ADDRESS {
        return Err(ErrorKind::AddressOverflow(operand.to_owned()));
    }
    Ok(Word(address))
}

fn constant(digits: &str) -> Result<Address, ErrorKind> {
    digits
        .parse::<Address>()
        .ok()
        .filter(|&n| n <= MAX_ADDRESS)
        .ok_or_else(|| ErrorKind::AddressOverflow(digits.to_owned()))
}

/// Encodes `[dest=]comp[;jump]` as `111 a cccccc ddd jjj`.
pub fn encode_c(text: &str) -> Result<Word, ErrorKind> {
    let (dest_comp, jump) = text.split_once(';').unwrap_or((text, ""));
    let (dest, comp) = dest_comp.split_once('=').unwrap_or(("", dest_comp));

    let comp_bits =
        tables::comp(comp).ok_or_else(|| ErrorKind::InvalidComp(comp.to_owned()))?;
    let dest_bits =
        tables::dest(dest).ok_or_else(|| ErrorKind::InvalidDest(dest.to_owned()))?;
    let jump_bits =
        tables::jump(jump).ok_or_else(|| ErrorKind::InvalidJump(jump.to_owned()))?;

    Ok(Word(C_PREFIX | comp_bits << 6 | dest_bits << 3 | jump_bits))
}
