use std::iter::Enumerate;
use std::str::Lines;


const COMMENT_BEGIN: &str = "//";

/// Cleans one raw source line.
///
/// Returns `None` for blank and comment lines. Otherwise yields the first
/// whitespace separated token, which drops any trailing comment set apart by
/// whitespace. A comment glued to the instruction (`@1//x`) stays in the token.
pub fn normalize(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_BEGIN) {
        return None;
    }
    line.split_whitespace().next()
}

/// Iterates over the tokens of a source, skipping lines that carry none.
///
/// Line numbers are 0-based and count every raw line.
#[derive(Debug)]
pub struct Lexer<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            lines: src.lines().enumerate(),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.lines
            .find_map(|(i, line)| normalize(line).map(|token| (i, token)))
    }
}
