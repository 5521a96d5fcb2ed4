use crate::{
    alu::Alu,
    cmp::Cmp,
    reg::Reg,
    word::{OpClass, Word},
};
use std::fmt;
use thiserror::Error;

// ----------------------------------------------------------------------------
// Instruction

/// One decoded SLEDE8 instruction. `SETTI` is the immediate form of `SETT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    STOPP,
    SETTI(Reg, u8),
    SETT(Reg, Reg),
    FINN(u16),
    LAST(Reg),
    LAGR(Reg),
    ALU(Alu, Reg, Reg),
    LES(Reg),
    SKRIV(Reg),
    CMP(Cmp, Reg, Reg),
    HOPP(u16),
    BHOPP(u16),
    TUR(u16),
    RETUR,
    NOPE,
}

/// A word that does not decode to any instruction. Expected for data cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown operation [{operation}] in operation class 0x{class:X}")]
pub struct DecodeError {
    pub class: u8,
    pub operation: u8,
}

impl DecodeError {
    fn of(word: Word) -> DecodeError {
        DecodeError {
            class: word.class(),
            operation: word.operation(),
        }
    }
}

// ----------------------------------------------------------------------------
// Codec

impl Inst {
    pub fn to_word(self) -> Word {
        match self {
            Inst::STOPP => Word::from_value(0x0000),
            Inst::SETTI(dst, value) => Word::pack_byte(OpClass::SETI, dst.index(), value),
            Inst::SETT(dst, src) => Word::pack_byte(OpClass::SETR, dst.index(), src.index()),
            Inst::FINN(addr) => Word::pack_addr(OpClass::FINN, addr),
            Inst::LAST(reg) => Word::pack(OpClass::MEM, 0, reg.index(), 0),
            Inst::LAGR(reg) => Word::pack(OpClass::MEM, 1, reg.index(), 0),
            Inst::ALU(op, a, b) => Word::pack(OpClass::ALU, op.into(), a.index(), b.index()),
            Inst::LES(reg) => Word::pack(OpClass::IO, 0, reg.index(), 0),
            Inst::SKRIV(reg) => Word::pack(OpClass::IO, 1, reg.index(), 0),
            Inst::CMP(op, a, b) => Word::pack(OpClass::CMP, op.into(), a.index(), b.index()),
            Inst::HOPP(addr) => Word::pack_addr(OpClass::HOPP, addr),
            Inst::BHOPP(addr) => Word::pack_addr(OpClass::BHOPP, addr),
            Inst::TUR(addr) => Word::pack_addr(OpClass::TUR, addr),
            Inst::RETUR => Word::from_value(0x000B),
            Inst::NOPE => Word::from_value(0x000C),
        }
    }

    pub fn from_word(word: Word) -> Result<Inst, DecodeError> {
        match word.class() {
            // STOPP is the all-zero word; any other class-0 bit pattern is data.
            OpClass::HALT => match word.value() {
                0 => Ok(Inst::STOPP),
                _ => Err(DecodeError::of(word)),
            },
            OpClass::SETI => Ok(Inst::SETTI(
                Reg::from_nibble(word.operation()),
                word.byte_value(),
            )),
            OpClass::SETR => Ok(Inst::SETT(
                Reg::from_nibble(word.operation()),
                Reg::from_nibble(word.argument1()),
            )),
            OpClass::FINN => Ok(Inst::FINN(word.address())),
            OpClass::MEM => match word.operation() {
                0 => Ok(Inst::LAST(Reg::from_nibble(word.argument1()))),
                1 => Ok(Inst::LAGR(Reg::from_nibble(word.argument1()))),
                _ => Err(DecodeError::of(word)),
            },
            OpClass::ALU => match Alu::try_from(word.operation()) {
                Ok(op) => Ok(Inst::ALU(
                    op,
                    Reg::from_nibble(word.argument1()),
                    Reg::from_nibble(word.argument2()),
                )),
                Err(_) => Err(DecodeError::of(word)),
            },
            OpClass::IO => match word.operation() {
                0 => Ok(Inst::LES(Reg::from_nibble(word.argument1()))),
                1 => Ok(Inst::SKRIV(Reg::from_nibble(word.argument1()))),
                _ => Err(DecodeError::of(word)),
            },
            OpClass::CMP => match Cmp::try_from(word.operation()) {
                Ok(op) => Ok(Inst::CMP(
                    op,
                    Reg::from_nibble(word.argument1()),
                    Reg::from_nibble(word.argument2()),
                )),
                Err(_) => Err(DecodeError::of(word)),
            },
            OpClass::HOPP => Ok(Inst::HOPP(word.address())),
            OpClass::BHOPP => Ok(Inst::BHOPP(word.address())),
            OpClass::TUR => Ok(Inst::TUR(word.address())),
            OpClass::RETUR => match word.operation() {
                0 => Ok(Inst::RETUR),
                _ => Err(DecodeError::of(word)),
            },
            OpClass::NOPE => match word.operation() {
                0 => Ok(Inst::NOPE),
                _ => Err(DecodeError::of(word)),
            },
            _ => Err(DecodeError::of(word)),
        }
    }
}

// ----------------------------------------------------------------------------
// Mnemonic text

impl fmt::Display for Inst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inst::STOPP => write!(f, "STOPP"),
            Inst::SETTI(dst, value) => write!(f, "SETT {}, {}", dst, value),
            Inst::SETT(dst, src) => write!(f, "SETT {}, {}", dst, src),
            Inst::FINN(addr) => write!(f, "FINN m{:03X}", addr),
            Inst::LAST(reg) => write!(f, "LAST {}", reg),
            Inst::LAGR(reg) => write!(f, "LAGR {}", reg),
            Inst::ALU(op, a, b) => write!(f, "{} {}, {}", op, a, b),
            Inst::LES(reg) => write!(f, "LES {}", reg),
            Inst::SKRIV(reg) => write!(f, "SKRIV {}", reg),
            Inst::CMP(op, a, b) => write!(f, "{} {}, {}", op, a, b),
            Inst::HOPP(addr) => write!(f, "HOPP a{:03X}", addr),
            Inst::BHOPP(addr) => write!(f, "BHOPP a{:03X}", addr),
            Inst::TUR(addr) => write!(f, "TUR a{:03X}", addr),
            Inst::RETUR => write!(f, "RETUR"),
            Inst::NOPE => write!(f, "NOPE"),
        }
    }
}

// ----------------------------------------------------------------------------
