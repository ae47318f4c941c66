//! A tiny Brainfuck interpreter library.
//!
//! This crate provides a minimal Brainfuck interpreter that operates on a
//! memory tape (default 30,000 cells) with a single data pointer. Source
//! text is cleaned and parsed into an instruction array with precomputed
//! loop jumps before anything executes.
//!
//! Features and behaviors:
//! - Memory tape initialized to 0; cells wrap on 8-bit overflow.
//! - The pointer clamps at the tape edges: moving left from cell 0 or
//!   right past the last cell leaves it in place.
//! - Input `,` reads a single byte from the input stream; at end of input
//!   the current cell is set to 0.
//! - Output `.` writes the byte at the current cell to the output stream
//!   (no newline).
//! - Properly handles nested loops `[]`; unmatched brackets are reported
//!   as errors before execution starts.
//! - Any character outside of Brainfuck's ><+-.,[] is discarded as a
//!   comment.
//! - Input and output streams are injected at construction, so programs
//!   can run against in-memory buffers as easily as stdin/stdout.
//!
//! Quick start:
//!
//! ```
//! use bfi::Interpreter;
//! use std::io;
//!
//! // Classic "Hello World!" in Brainfuck
//! let code = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";
//! let mut output = Vec::new();
//! let mut bf = Interpreter::new(io::empty(), &mut output);
//! bf.execute(code).expect("program should run");
//! assert_eq!(output, b"Hello World!\n");
//! ```

pub mod cli_util;
pub mod error;
pub mod interpreter;
pub mod parser;
pub mod tape;

pub use error::{BracketKind, Error};
pub use interpreter::Interpreter;
pub use parser::{Instruction, InstructionStream, Program, bracket_pairs};
pub use tape::{DEFAULT_TAPE_LEN, Tape};
