use crate::{
    error::SourceError,
    preprocess::preprocess,
    token::tokenize,
    translate::translate,
};

/// Image file marker, always the first 7 bytes of an assembled program.
pub const MAGIC: [u8; 7] = *b".SLEDE8";

/// Debug map entry: emitted address back to its source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugInfo {
    pub address: u16,
    pub line: u16,
    pub raw: String,
}

/// Assembled program: the binary image plus its debug map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub exe: Vec<u8>,
    pub pdb: Vec<DebugInfo>,
}

/// Assemble full source text. The first malformed line aborts the run; there
/// is no partial image.
pub fn assemble(source: &str) -> Result<Target, SourceError> {
    let map = preprocess(source);

    let mut exe = Vec::from(MAGIC);
    let mut pdb = Vec::with_capacity(map.records.len());

    for record in &map.records {
        let stmt = tokenize(&record.raw);
        let bytes = translate(&stmt, &map.labels).map_err(|kind| SourceError {
            line: record.line,
            raw: record.raw.clone(),
            kind,
        })?;
        exe.extend_from_slice(&bytes);
        pdb.push(DebugInfo {
            address: record.address,
            line: record.line,
            raw: record.raw.clone(),
        });
    }

    Ok(Target { exe, pdb })
}

/// Assemble one statement on its own, without the magic header. A line that
/// emits nothing (whitespace, comment, label) yields empty bytes.
pub fn assemble_statement(statement: &str) -> Result<Vec<u8>, SourceError> {
    let map = preprocess(statement);
    match map.records.first() {
        Some(record) => {
            translate(&tokenize(&record.raw), &map.labels).map_err(|kind| SourceError {
                line: record.line,
                raw: record.raw.clone(),
                kind,
            })
        }
        None => Ok(Vec::new()),
    }
}
