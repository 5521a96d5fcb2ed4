use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("expected no arguments: `{0}`")]
    ExpectedNoArguments(String),

    #[error("expected one argument: `{0}`")]
    ExpectedOneArgument(String),

    #[error("expected two arguments: `{0}`")]
    ExpectedTwoArguments(String),

    #[error("unknown opcode: `{0}`")]
    UnknownOpcode(String),

    #[error("invalid register: `{0}`")]
    InvalidRegister(String),

    #[error("invalid .DATA format: `{0}`")]
    InvalidData(String),

    #[error("undefined label: `{0}`")]
    UndefinedLabel(String),
}

/// An assembly error located at its source line. Aborts the whole run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {}: {kind}", .line + 1)]
pub struct SourceError {
    pub line: u16,
    pub raw: String,
    pub kind: Error,
}

impl SourceError {
    /// Print with diagnostic framing. `line` is 0-based, displayed 1-based.
    pub fn print_diag(&self) {
        let line_num = self.line as usize + 1;
        cprintln!("<red,bold>error</>: {}", self.kind);
        cprintln!("     <blue>--></> line {}", line_num);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line_num, self.raw);
        cprintln!("      <blue>|</>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::InvalidRegister("x5".to_string());
        assert_eq!("invalid register: `x5`", err.to_string());

        let err = SourceError {
            line: 0,
            raw: "SETT x5, 1".to_string(),
            kind: err,
        };
        assert_eq!("line 1: invalid register: `x5`", err.to_string());
    }
}
