use once_cell::sync::Lazy;
use regex::Regex;

/// Category of one trimmed source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Whitespace,
    Comment,
    Label,
    Data,
    Instruction,
}

// Label names allow the Norwegian letters in either case.
static LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-zA-ZæøåÆØÅ\-_]+:$").unwrap());
static DATA: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.DATA(\s|$)").unwrap());

/// Classify a trimmed line. First match wins; anything unmatched is assumed
/// to be an instruction and left for the translator to judge.
pub fn classify(line: &str) -> Kind {
    if line.is_empty() {
        return Kind::Whitespace;
    }
    if line.starts_with(';') {
        return Kind::Comment;
    }
    if LABEL.is_match(line) {
        return Kind::Label;
    }
    if DATA.is_match(line) {
        return Kind::Data;
    }
    Kind::Instruction
}
