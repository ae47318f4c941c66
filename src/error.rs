use std::fmt;

/// Errors that can occur while interpreting Brainfuck code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The cell storage was indexed outside its valid range.
    #[error("Tape index {index} out of bounds for tape of length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// A loop bracket has no partner in the instruction stream.
    #[error("Unmatched bracket {kind} at position {position}")]
    UnmatchedBracket { position: usize, kind: BracketKind },

    /// An underlying I/O error occurred on the input or output stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Which side of a loop was unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    Open,
    Close,
}

impl fmt::Display for BracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketKind::Open => write!(f, "'['"),
            BracketKind::Close => write!(f, "']'"),
        }
    }
}
