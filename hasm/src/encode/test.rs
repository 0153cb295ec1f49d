use expect_test::{expect, Expect};

use crate::error::ErrorKind;
use crate::parse::first_pass;
use crate::symbol::SymbolTable;

use super::{encode_a, encode_c, second_pass, Word};

fn check(src: &str, expect: Expect) {
    let output = match first_pass(src).and_then(second_pass) {
        Ok(words) => words.iter().map(|w| format!("{w}\n")).collect::<String>(),
        Err(e) => format!("error: {e}"),
    };
    expect.assert_eq(&output);
}

fn check_c(text: &str, expect: Expect) {
    let output = match encode_c(text) {
        Ok(word) => word.to_string(),
        Err(e) => e.to_string(),
    };
    expect.assert_eq(&output);
}

#[test]
fn word_display() {
    assert_eq!(Word(0).to_string(), "0000000000000000");
    assert_eq!(Word(5).to_string(), "0000000000000101");
    assert_eq!(Word(0xFFFF).to_string(), "1111111111111111");
}

#[test]
fn a_constants() {
    let mut symbols = SymbolTable::new();
    for n in 0..=0x7FFFu16 {
        let word = encode_a(&n.to_string(), &mut symbols).unwrap();
        let s = word.to_string();
        assert_eq!(s.len(), 16);
        assert!(s.starts_with('0'));
        assert_eq!(s[1..], format!("{n:015b}"));
    }
    assert_eq!(symbols.next_variable(), 16);
}

#[test]
fn a_overflow() {
    let mut symbols = SymbolTable::new();
    for operand in ["32768", "65535", "65536", "99999999999999999999999"] {
        assert_eq!(
            encode_a(operand, &mut symbols),
            Err(ErrorKind::AddressOverflow(operand.into()))
        );
    }
    assert_eq!(encode_a("032767", &mut symbols), Ok(Word(0x7FFF)));
}

#[test]
fn a_symbols() {
    let mut symbols = SymbolTable::new();
    assert_eq!(encode_a("KBD", &mut symbols), Ok(Word(24576)));
    assert_eq!(encode_a("R13", &mut symbols), Ok(Word(13)));
    assert_eq!(encode_a("x", &mut symbols), Ok(Word(16)));
    assert_eq!(encode_a("y", &mut symbols), Ok(Word(17)));
    assert_eq!(encode_a("x", &mut symbols), Ok(Word(16)));
}

#[test]
fn a_invalid_symbols() {
    let mut symbols = SymbolTable::new();
    for operand in ["", "1//note", "i//x"] {
        assert_eq!(
            encode_a(operand, &mut symbols),
            Err(ErrorKind::InvalidSymbol(operand.into()))
        );
    }
    assert_eq!(symbols.next_variable(), 16);
}

#[test]
fn a_any_symbol() {
    let mut symbols = SymbolTable::new();
    assert_eq!(encode_a("-1", &mut symbols), Ok(Word(16)));
    assert_eq!(encode_a("a+b", &mut symbols), Ok(Word(17)));
    assert_eq!(encode_a("12ab", &mut symbols), Ok(Word(18)));
    assert_eq!(encode_a("-1", &mut symbols), Ok(Word(16)));
}

#[test]
fn c_fields() {
    check_c("D=A", expect!["1110110000010000"]);
    check_c("AMD=M-1", expect!["1111110010111000"]);
    check_c("D;JGT", expect!["1110001100000001"]);
    check_c("0;JMP", expect!["1110101010000111"]);
    check_c("MD=D|M;JNE", expect!["1111010101011101"]);
    check_c("M", expect!["1111110000000000"]);
}

#[test]
fn c_every_comp() {
    for (mnemonic, code) in crate::tables::COMP {
        let word = encode_c(mnemonic).unwrap();
        assert_eq!(word.0 >> 13, 0b111);
        assert_eq!(word.0 >> 6 & 0b111_1111, code);
        assert_eq!(word.0 & 0b11_1111, 0);
    }
}

#[test]
fn c_errors() {
    check_c("D=X", expect![[r#"invalid comp value: "X""#]]);
    check_c("X=D", expect![[r#"invalid dest value: "X""#]]);
    check_c("D;JJJ", expect![[r#"invalid jump value: "JJJ""#]]);
    check_c("DM=D", expect![[r#"invalid dest value: "DM""#]]);
    check_c("0;JMP;JMP", expect![[r#"invalid jump value: "JMP;JMP""#]]);
    check_c("D=A=M", expect![[r#"invalid comp value: "A=M""#]]);
    check_c("D=", expect![[r#"invalid comp value: """#]]);
    check_c("/", expect![[r#"invalid comp value: "/""#]]);
    check_c("D=A//x", expect![[r#"invalid comp value: "A//x""#]]);
}

#[test]
fn variables_in_order() {
    check(
        "@a\n@b\n@a\n@R2\n@c\n@b\n",
        expect![[r#"
            0000000000010000
            0000000000010001
            0000000000010000
            0000000000000010
            0000000000010010
            0000000000010001
        "#]],
    );
}

#[test]
fn labels_not_variables() {
    check(
        "@x\n@END\n(END)\n@y\n",
        expect![[r#"
            0000000000010000
            0000000000000010
            0000000000010001
        "#]],
    );
}

#[test]
fn errors_carry_line() {
    check("@1\n\n// c\nD=X\n", expect![[r#"error: line 3: invalid comp value: "X""#]]);
    check("@32768\n", expect![[r#"error: line 0: address "32768" does not fit in 15 bits"#]]);
    check("D=A\n@1//note\n", expect![[r#"error: line 1: invalid symbol: "1//note""#]]);
    check("@\n", expect![[r#"error: line 0: invalid symbol: """#]]);
}

#[test]
fn first_error_wins() {
    check("D=X\nX=D\n", expect![[r#"error: line 0: invalid comp value: "X""#]]);
}

#[test]
fn label_past_rom_end() {
    let mut src = "@END\n".to_owned();
    src.push_str(&"D=0\n".repeat(crate::tables::ROM_SIZE - 1));
    src.push_str("(END)\n");
    check(&src, expect![[r#"error: line 0: address "END" does not fit in 15 bits"#]]);
}
