use crate::error::Error;
use crate::parser::InstructionStream;
use std::io::{self, Write};

/// Pretty-print a structured [`Error`] with caret positioning.
/// If `program` is `Some("bfi")`, prefix messages with "bfi: ..." for CLI use.
pub fn print_error(program: Option<&str>, stream: &InstructionStream, err: &Error) {
    let prefix_program = |msg: &str| {
        if let Some(p) = program {
            format!("{p}: {msg}")
        } else {
            msg.to_string()
        }
    };

    match err {
        Error::UnmatchedBracket { position, kind } => {
            let msg = prefix_program(&format!("Parse error: unmatched bracket {kind}"));
            print_stream_context(&msg, stream, *position);
        }
        Error::OutOfBounds { index, len } => {
            let msg = prefix_program(&format!(
                "Runtime error: tape index {index} out of bounds (len={len})"
            ));
            eprintln!("{msg}");
            let _ = io::stderr().flush();
        }
        Error::Io(source) => {
            let msg = prefix_program(&format!("I/O error: {source}"));
            eprintln!("{msg}");
            let _ = io::stderr().flush();
        }
    }
}

/// Print a concise error with its stream position and a caret context window.
///
/// An [`InstructionStream`] is ASCII by construction, so byte and character
/// positions coincide and plain byte slicing is safe.
pub fn print_stream_context(prefix: &str, stream: &InstructionStream, pos: usize) {
    eprintln!("{prefix} at position {pos}");

    // Show a short window around the position for context
    const WINDOW: usize = 32;

    let start = pos.saturating_sub(WINDOW).min(stream.len());
    let end = (pos + WINDOW + 1).min(stream.len());

    eprintln!("  {}", &stream.as_str()[start..end]);

    // Caret under the exact position
    let mut underline = String::new();
    for _ in 0..pos.saturating_sub(start) {
        underline.push(' ');
    }
    underline.push('^');
    eprintln!("  {underline}");
    let _ = io::stderr().flush();
}
