pub mod assemble;
pub mod error;
pub mod label;
pub mod line;
pub mod preprocess;
pub mod token;
pub mod translate;

pub use assemble::{assemble, assemble_statement, DebugInfo, Target, MAGIC};
pub use error::{Error, SourceError};
