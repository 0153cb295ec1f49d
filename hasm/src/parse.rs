use crate::error::{AsmError, ErrorKind};
use crate::lex::Lexer;
use crate::symbol::SymbolTable;
use crate::tables::ROM_SIZE;
use crate::Address;


const LABEL_BEGIN: char = '(';
const LABEL_END: char = ')';

/// A cleaned instruction and the source line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction<'a> {
    pub text: &'a str,
    pub line: usize,
}

/// Output of the first pass: every real instruction in order, and a symbol
/// table holding all labels but no variables yet.
#[derive(Debug)]
pub struct Program<'a> {
    pub instructions: Vec<Instruction<'a>>,
    pub symbols: SymbolTable,
}

/// Binds each `(LABEL)` to the address of the instruction following it and
/// collects the instructions.
pub fn first_pass(src: &str) -> Result<Program<'_>, AsmError> {
    let mut instructions = Vec::new();
    let mut symbols = SymbolTable::new();

    for (line, text) in Lexer::new(src) {
        if text.starts_with(LABEL_BEGIN) {
            let name = label(text).map_err(|kind| AsmError::new(line, kind))?;
            // `instructions.len()` never exceeds ROM_SIZE, so it fits an address.
            symbols
                .define_label(name, instructions.len() as Address)
                .map_err(|kind| AsmError::new(line, kind))?;
            continue;
        }
        if instructions.len() == ROM_SIZE {
            return Err(AsmError::new(line, ErrorKind::RomOverflow));
        }
        instructions.push(Instruction { text, line });
    }

    tracing::debug!(
        instructions = instructions.len(),
        symbols = symbols.len(),
        "first pass done"
    );
    Ok(Program {
        instructions,
        symbols,
    })
}

fn label(text: &str) -> Result<&str, ErrorKind> {
    text.strip_prefix(LABEL_BEGIN)
        .and_then(|t| t.strip_suffix(LABEL_END))
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ErrorKind::MalformedLabel(text.to_owned()))
}
