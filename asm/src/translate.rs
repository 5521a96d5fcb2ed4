use crate::{error::Error, label::Labels, token::Stmt};
use arch::{alu::Alu, cmp::Cmp, inst::Inst, reg::Reg};

/// Translate one tokenized statement to its encoded bytes: two little-endian
/// bytes for an instruction word, raw bytes for a `.DATA` line.
pub fn translate(stmt: &Stmt, labels: &Labels) -> Result<Vec<u8>, Error> {
    if stmt.mnemonic == ".DATA" {
        return translate_data(stmt);
    }

    let inst = match stmt.mnemonic.as_str() {
        "STOPP" => {
            stmt.ensure_no_args()?;
            Inst::STOPP
        }
        "SETT" => {
            let (dst, src) = stmt.two_args()?;
            let dst = get_reg(dst)?;
            // A second operand that parses as a literal selects the immediate
            // form; anything else is read as a register reference.
            match parse_val(src) {
                Some(value) => Inst::SETTI(dst, value as u8),
                None => Inst::SETT(dst, get_reg(src)?),
            }
        }
        "FINN" => Inst::FINN(get_addr(stmt.single_arg()?, labels)?),
        "LAST" => Inst::LAST(get_reg(stmt.single_arg()?)?),
        "LAGR" => Inst::LAGR(get_reg(stmt.single_arg()?)?),
        "LES" => Inst::LES(get_reg(stmt.single_arg()?)?),
        "SKRIV" => Inst::SKRIV(get_reg(stmt.single_arg()?)?),
        "HOPP" => Inst::HOPP(get_addr(stmt.single_arg()?, labels)?),
        "BHOPP" => Inst::BHOPP(get_addr(stmt.single_arg()?, labels)?),
        "TUR" => Inst::TUR(get_addr(stmt.single_arg()?, labels)?),
        "RETUR" => {
            stmt.ensure_no_args()?;
            Inst::RETUR
        }
        "NOPE" => {
            stmt.ensure_no_args()?;
            Inst::NOPE
        }
        other => {
            if let Ok(op) = other.parse::<Alu>() {
                let (a, b) = stmt.two_args()?;
                Inst::ALU(op, get_reg(a)?, get_reg(b)?)
            } else if let Ok(op) = other.parse::<Cmp>() {
                let (a, b) = stmt.two_args()?;
                Inst::CMP(op, get_reg(a)?, get_reg(b)?)
            } else {
                return Err(Error::UnknownOpcode(other.to_string()));
            }
        }
    };

    Ok(inst.to_word().to_le_bytes().to_vec())
}

// ----------------------------------------------------------------------------
// .DATA

fn translate_data(stmt: &Stmt) -> Result<Vec<u8>, Error> {
    let mut bytes = Vec::new();
    for arg in &stmt.args {
        match string_body(arg) {
            StringBody::Text(text) => bytes.extend(text.chars().map(encode_char)),
            StringBody::Malformed => return Err(Error::InvalidData(arg.clone())),
            StringBody::NotAString => {
                let value = parse_val(arg).ok_or_else(|| Error::InvalidData(arg.clone()))?;
                bytes.push(value as u8);
            }
        }
    }
    Ok(bytes)
}

enum StringBody<'a> {
    Text(&'a str),
    Malformed,
    NotAString,
}

/// Pick apart a single-quoted string argument. The closing quote must come
/// after at least one character; an empty or unterminated literal is
/// malformed.
fn string_body(arg: &str) -> StringBody<'_> {
    let Some(rest) = arg.strip_prefix('\'') else {
        return StringBody::NotAString;
    };
    match rest.find('\'') {
        Some(end) if end >= 1 => StringBody::Text(&rest[..end]),
        _ => StringBody::Malformed,
    }
}

// One byte per character: ASCII, with `?` standing in above 0x7F.
fn encode_char(c: char) -> u8 {
    if (c as u32) <= 0x7F {
        c as u32 as u8
    } else {
        b'?'
    }
}

/// Encoded byte length of a data line's arguments. The preprocessor uses this
/// for its address advance, so it must agree with `translate_data` for every
/// well-formed argument.
pub(crate) fn data_len(args: &[String]) -> usize {
    args.iter()
        .map(|arg| match string_body(arg) {
            StringBody::Text(text) => text.chars().count(),
            StringBody::Malformed => 0,
            StringBody::NotAString => 1,
        })
        .sum()
}

// ----------------------------------------------------------------------------
// Operands

/// Literal value: decimal or `0x`-prefixed hexadecimal.
fn parse_val(s: &str) -> Option<u16> {
    match s.strip_prefix("0x") {
        Some(hex) => u16::from_str_radix(hex, 16).ok(),
        None => s.parse::<u16>().ok(),
    }
}

fn get_reg(s: &str) -> Result<Reg, Error> {
    let invalid = || Error::InvalidRegister(s.to_string());
    let numeral = s.strip_prefix('r').ok_or_else(invalid)?;
    let index = parse_val(numeral).ok_or_else(invalid)?;
    u8::try_from(index)
        .ok()
        .and_then(Reg::new)
        .ok_or_else(invalid)
}

/// Address operand: a literal value, or a label resolved via the table.
fn get_addr(s: &str, labels: &Labels) -> Result<u16, Error> {
    if let Some(value) = parse_val(s) {
        return Ok(value);
    }
    labels
        .get(s)
        .ok_or_else(|| Error::UndefinedLabel(s.to_string()))
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    fn enc(line: &str) -> Result<Vec<u8>, Error> {
        translate(&tokenize(line), &Labels::new())
    }

    #[test]
    fn test_zero_arg_ops() {
        assert_eq!(Ok(vec![0x00, 0x00]), enc("STOPP"));
        assert_eq!(Ok(vec![0x0B, 0x00]), enc("RETUR"));
        assert_eq!(Ok(vec![0x0C, 0x00]), enc("NOPE"));
    }

    #[test]
    fn test_zero_arg_arity() {
        assert!(matches!(enc("STOPP r1"), Err(Error::ExpectedNoArguments(_))));
        assert!(matches!(enc("RETUR 4"), Err(Error::ExpectedNoArguments(_))));
        assert!(matches!(enc("NOPE r1, r2"), Err(Error::ExpectedNoArguments(_))));
    }

    #[test]
    fn test_sett_forms() {
        // SETT r1, 44 -> immediate form, value byte high.
        assert_eq!(Ok(vec![0x11, 44]), enc("SETT r1, 44"));
        assert_eq!(Ok(vec![0x11, 0xFE]), enc("SETT r1, 0xFE"));
        // SETT r1, r2 -> register form.
        assert_eq!(Ok(vec![0x12, 0x02]), enc("SETT r1, r2"));
        // An unparsable literal is treated as a register reference.
        assert!(matches!(enc("SETT r1, fem"), Err(Error::InvalidRegister(_))));
        assert!(matches!(enc("SETT r1"), Err(Error::ExpectedTwoArguments(_))));
    }

    #[test]
    fn test_registers() {
        assert_eq!(Ok(vec![0x04, 0x0F]), enc("LAST r15"));
        assert_eq!(Ok(vec![0x14, 0x00]), enc("LAGR r0"));
        assert_eq!(Ok(vec![0x06, 0x03]), enc("LES r3"));
        assert_eq!(Ok(vec![0x16, 0x03]), enc("SKRIV r3"));
        for bad in ["r16", "r99", "x5", "5", "r", "r-1"] {
            let line = format!("LES {}", bad);
            assert!(
                matches!(enc(&line), Err(Error::InvalidRegister(_))),
                "{}",
                line
            );
        }
    }

    #[test]
    fn test_alu_and_cmp() {
        assert_eq!(Ok(vec![0x05, 0x21]), enc("OG r1, r2"));
        assert_eq!(Ok(vec![0x65, 0x21]), enc("MINUS r1, r2"));
        assert_eq!(Ok(vec![0x07, 0x21]), enc("LIK r1, r2"));
        assert_eq!(Ok(vec![0x57, 0x21]), enc("SEL r1, r2"));
        assert!(matches!(enc("PLUSS r1"), Err(Error::ExpectedTwoArguments(_))));
        // Mnemonics are case-sensitive.
        assert!(matches!(enc("pluss r1, r2"), Err(Error::UnknownOpcode(_))));
    }

    #[test]
    fn test_addresses() {
        assert_eq!(Ok(vec![0x28, 0x01]), enc("HOPP 0x12"));
        assert_eq!(Ok(vec![0x29, 0x01]), enc("BHOPP 18"));
        assert_eq!(Ok(vec![0x2A, 0x01]), enc("TUR 0x12"));
        assert_eq!(Ok(vec![0x23, 0x01]), enc("FINN 0x12"));

        let mut labels = Labels::new();
        labels.insert("START", 0x012);
        assert_eq!(
            Ok(vec![0x28, 0x01]),
            translate(&tokenize("HOPP START"), &labels)
        );
        assert!(matches!(
            translate(&tokenize("HOPP SLUTT"), &labels),
            Err(Error::UndefinedLabel(_))
        ));
    }

    #[test]
    fn test_unknown_opcode() {
        assert!(matches!(enc("MOV r1, r2"), Err(Error::UnknownOpcode(_))));
    }

    #[test]
    fn test_data_bytes() {
        assert_eq!(Ok(vec![0x41, 0x42, 0x41]), enc(".DATA 'AB', 0x41"));
        assert_eq!(Ok(vec![7, 255]), enc(".DATA 7, 255"));
        assert_eq!(Ok(vec![]), enc(".DATA"));
    }

    #[test]
    fn test_data_errors() {
        assert!(matches!(enc(".DATA 'AB"), Err(Error::InvalidData(_))));
        assert!(matches!(enc(".DATA ''"), Err(Error::InvalidData(_))));
        assert!(matches!(enc(".DATA abc"), Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_data_len_matches_emission() {
        for line in [".DATA 'AB', 0x41", ".DATA 7, 255", ".DATA 'ABC'", ".DATA"] {
            let stmt = tokenize(line);
            let emitted = translate(&stmt, &Labels::new()).unwrap();
            assert_eq!(emitted.len(), data_len(&stmt.args), "{}", line);
        }
    }
}
