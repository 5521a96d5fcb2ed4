use crate::{
    inst::{DecodeError, Inst},
    word::Word,
};
use color_print::cformat;

// ----------------------------------------------------------------------------
// Decoded word

/// Decode result for one word. An undecodable word is not a failure: it marks
/// a memory cell holding data, and renders as a `.DATA` byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    word: Word,
    inst: Result<Inst, DecodeError>,
}

impl Decoded {
    pub fn new(opcode: u8, param: u8) -> Decoded {
        Decoded::from_word(Word::new(opcode, param))
    }

    pub fn from_word(word: Word) -> Decoded {
        Decoded {
            word,
            inst: Inst::from_word(word),
        }
    }

    pub fn word(&self) -> Word {
        self.word
    }

    pub fn inst(&self) -> Option<Inst> {
        self.inst.ok()
    }

    pub fn is_valid(&self) -> bool {
        self.inst.is_ok()
    }

    pub fn error(&self) -> Option<DecodeError> {
        self.inst.err()
    }

    /// Mnemonic text of a valid word, e.g. `SETT r1, 44`.
    pub fn text(&self) -> Option<String> {
        self.inst.map(|inst| inst.to_string()).ok()
    }

    // ------------------------------------------------------------------------
    // Rendering

    /// One display line for this word at `addr`. With `show_address` the line
    /// carries the address and raw byte pair; without it the address becomes
    /// a label-style prefix line (`a` for code, `m` for data).
    pub fn render(&self, addr: u16, show_address: bool) -> String {
        let mut out = String::new();

        if !show_address {
            let sigil = if self.is_valid() { 'a' } else { 'm' };
            out.push_str(&format!("{}{:03X}:\n", sigil, addr));
        } else {
            out.push_str(&format!(
                "A[{:03X}] | I[{:02X} {:02X}] ",
                addr, self.word.opcode, self.word.param
            ));
        }

        match &self.inst {
            Ok(inst) => out.push_str(&inst.to_string()),
            Err(err) => out.push_str(&format!(".DATA 0x{:02X} ; {}", self.word.opcode, err)),
        }

        out
    }

    /// Colored single-line form for dump listings.
    pub fn cformat(&self) -> String {
        match &self.inst {
            Ok(inst) => {
                let text = inst.to_string();
                match text.split_once(' ') {
                    Some((mnemonic, rest)) => cformat!("<red>{:<7}</><blue>{}</>", mnemonic, rest),
                    None => cformat!("<red>{}</>", text),
                }
            }
            Err(err) => cformat!("<yellow>.DATA 0x{:02X}</> ; {}", self.word.opcode, err),
        }
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid() {
        let d = Decoded::new(0x08, 0x00);
        assert!(d.is_valid());
        assert_eq!(Some("HOPP a000".to_string()), d.text());
        assert_eq!(None, d.error());
    }

    #[test]
    fn test_decode_data() {
        // Class 0 with a non-zero param byte never decodes.
        let d = Decoded::new(0x00, 0x01);
        assert!(!d.is_valid());
        assert_eq!(None, d.text());
        let err = d.error().expect("decode error");
        assert_eq!(0x0, err.class);
    }

    #[test]
    fn test_render_with_address() {
        let d = Decoded::new(0x08, 0x00);
        assert_eq!("A[02A] | I[08 00] HOPP a000", d.render(0x2A, true));
    }

    #[test]
    fn test_render_without_address() {
        let d = Decoded::new(0x0C, 0x00);
        assert_eq!("a01F:\nNOPE", d.render(0x1F, false));
    }

    #[test]
    fn test_render_data_cell() {
        // Class 0x5 with sub-code 7 has no ALU operation.
        let d = Decoded::new(0x75, 0x00);
        assert!(!d.is_valid());
        let line = d.render(0x000, true);
        assert!(line.starts_with("A[000] | I[75 00] .DATA 0x75 ; "), "{}", line);
        let line = d.render(0x000, false);
        assert!(line.starts_with("m000:\n.DATA 0x75"), "{}", line);
    }
}
