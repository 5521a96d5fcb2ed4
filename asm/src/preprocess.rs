use crate::{
    label::Labels,
    line::{classify, Kind},
    token::tokenize,
    translate::data_len,
};

/// One emitting source line: 0-based line number, assigned address, raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub line: u16,
    pub address: u16,
    pub raw: String,
}

/// First-pass result: every emitting line with its address, plus the
/// completed label table.
#[derive(Debug, Default)]
pub struct SourceMap {
    pub records: Vec<Record>,
    pub labels: Labels,
}

/// Walk the source once, binding labels and assigning addresses. Instructions
/// advance the counter by one word; data lines by their encoded byte length.
/// Never fails: malformed arguments surface later in the translator.
pub fn preprocess(source: &str) -> SourceMap {
    let mut map = SourceMap::default();
    let mut address: u16 = 0;

    for (idx, current) in source.split('\n').enumerate() {
        let line = current.trim();
        match classify(line) {
            Kind::Label => {
                if let Some(name) = line.strip_suffix(':') {
                    map.labels.insert(name, address);
                }
            }
            Kind::Data => {
                map.records.push(Record {
                    line: idx as u16,
                    address,
                    raw: line.to_string(),
                });
                address = address.wrapping_add(data_len(&tokenize(line).args) as u16);
            }
            Kind::Instruction => {
                map.records.push(Record {
                    line: idx as u16,
                    address,
                    raw: line.to_string(),
                });
                address = address.wrapping_add(2);
            }
            Kind::Whitespace | Kind::Comment => {}
        }
    }

    map
}
