use crate::error::Error;

/// One tokenized statement: opcode mnemonic plus trimmed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stmt {
    pub mnemonic: String,
    pub args: Vec<String>,
}

/// Split one raw line. Everything from the first `;` on is dropped, the first
/// space-delimited token is the mnemonic, and the rest is joined without a
/// separator before splitting on commas. No semantic validation happens here.
pub fn tokenize(raw: &str) -> Stmt {
    let trimmed = raw.trim();
    let code = match trimmed.split_once(';') {
        Some((head, _)) => head,
        None => trimmed,
    };

    let mut parts = code.split(' ');
    let mnemonic = parts.next().unwrap_or("").trim().to_string();
    let rest: String = parts.collect();

    let args = rest
        .split(',')
        .map(str::trim)
        .filter(|arg| !arg.is_empty())
        .map(String::from)
        .collect();

    Stmt { mnemonic, args }
}

impl Stmt {
    fn diag(&self) -> String {
        format!("{} {}", self.mnemonic, self.args.join(", "))
    }

    pub fn ensure_no_args(&self) -> Result<(), Error> {
        if self.args.is_empty() {
            Ok(())
        } else {
            Err(Error::ExpectedNoArguments(self.diag()))
        }
    }

    pub fn single_arg(&self) -> Result<&str, Error> {
        match self.args.as_slice() {
            [arg] => Ok(arg),
            _ => Err(Error::ExpectedOneArgument(self.diag())),
        }
    }

    pub fn two_args(&self) -> Result<(&str, &str), Error> {
        match self.args.as_slice() {
            [a, b] => Ok((a, b)),
            _ => Err(Error::ExpectedTwoArguments(self.diag())),
        }
    }
}
