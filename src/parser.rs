//! Turning source text into an executable program.
//!
//! Parsing happens in three steps: the raw source is filtered down to an
//! [`InstructionStream`] of the eight Brainfuck characters, the loop
//! brackets are paired up once with [`bracket_pairs`], and the stream is
//! then lowered into a [`Program`] whose `[`/`]` instructions carry the
//! index of their partner, so execution can jump without rescanning.

use std::collections::HashMap;
use std::fmt;

use crate::error::{BracketKind, Error};

/// Source text reduced to the eight instruction characters `><+-.,[]`.
///
/// Every position reported in an [`Error::UnmatchedBracket`] is an offset
/// into this stream, not into the raw source it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionStream(String);

impl InstructionStream {
    /// Filter `source`, discarding every non-instruction character.
    pub fn from_source(source: &str) -> Self {
        InstructionStream(source.chars().filter(|&c| is_instruction(c)).collect())
    }

    /// The cleaned text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of instructions in the stream.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the stream holds no instructions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for InstructionStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_instruction(c: char) -> bool {
    matches!(c, '>' | '<' | '+' | '-' | '.' | ',' | '[' | ']')
}

/// Pair every `[` in `stream` with its matching `]`.
///
/// Returns a map from opening-bracket position to closing-bracket position,
/// following standard nested pairing. A bracket with no partner simply has
/// no entry; deciding whether that is an error is left to the caller.
pub fn bracket_pairs(stream: &InstructionStream) -> HashMap<usize, usize> {
    let mut pairs = HashMap::new();
    let mut stack: Vec<usize> = Vec::new();

    for (position, byte) in stream.as_str().bytes().enumerate() {
        match byte {
            b'[' => stack.push(position),
            b']' => {
                if let Some(open) = stack.pop() {
                    pairs.insert(open, position);
                }
            }
            _ => {}
        }
    }

    pairs
}

/// One executable instruction. Loop brackets carry the position of their
/// partner, the target the cursor jumps to when the condition holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    MoveRight,
    MoveLeft,
    Increment,
    Decrement,
    Output,
    Input,
    /// `[`: jump just past this position's partner `]` when the cell is 0.
    JumpIfZero(usize),
    /// `]`: jump back to this position's partner `[` when the cell is nonzero.
    JumpIfNonZero(usize),
}

/// A parsed program: one [`Instruction`] per stream position, with every
/// loop bracket resolved to its jump target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Lower a cleaned stream into executable form.
    ///
    /// Fails with [`Error::UnmatchedBracket`] if any `[` or `]` has no
    /// partner; the error carries the position of the first offender in
    /// stream order, and nothing of the program executes.
    pub fn parse(stream: &InstructionStream) -> Result<Self, Error> {
        let pairs = bracket_pairs(stream);
        let mut opens: HashMap<usize, usize> = HashMap::with_capacity(pairs.len());
        for (&open, &close) in &pairs {
            opens.insert(close, open);
        }

        let mut instructions = Vec::with_capacity(stream.len());
        for (position, byte) in stream.as_str().bytes().enumerate() {
            let instruction = match byte {
                b'>' => Instruction::MoveRight,
                b'<' => Instruction::MoveLeft,
                b'+' => Instruction::Increment,
                b'-' => Instruction::Decrement,
                b'.' => Instruction::Output,
                b',' => Instruction::Input,
                b'[' => match pairs.get(&position) {
                    Some(&close) => Instruction::JumpIfZero(close),
                    None => {
                        return Err(Error::UnmatchedBracket {
                            position,
                            kind: BracketKind::Open,
                        });
                    }
                },
                b']' => match opens.get(&position) {
                    Some(&open) => Instruction::JumpIfNonZero(open),
                    None => {
                        return Err(Error::UnmatchedBracket {
                            position,
                            kind: BracketKind::Close,
                        });
                    }
                },
                // from_source admits nothing but the eight instruction bytes.
                _ => unreachable!("instruction stream holds a non-instruction byte"),
            };
            instructions.push(instruction);
        }

        Ok(Program { instructions })
    }

    /// Clean `source` and parse it in one step.
    pub fn from_source(source: &str) -> Result<Self, Error> {
        Self::parse(&InstructionStream::from_source(source))
    }

    /// The executable instructions in stream order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions in the program.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the program holds no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_source_discards_non_instruction_characters() {
        let stream = InstructionStream::from_source("say + hello . to [ the ] world ,");
        assert_eq!(stream.as_str(), "+.[],");
    }

    #[test]
    fn from_source_keeps_an_already_clean_string() {
        let stream = InstructionStream::from_source("><+-.,[]");
        assert_eq!(stream.as_str(), "><+-.,[]");
    }

    #[test]
    fn bracket_pairs_matches_nested_loops() {
        let stream = InstructionStream::from_source("[[]][]");
        let pairs = bracket_pairs(&stream);
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[&0], 3);
        assert_eq!(pairs[&1], 2);
        assert_eq!(pairs[&4], 5);
    }

    #[test]
    fn bracket_pairs_leaves_unmatched_open_without_entry() {
        let stream = InstructionStream::from_source("[[]");
        let pairs = bracket_pairs(&stream);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[&1], 2);
        assert!(!pairs.contains_key(&0));
    }

    #[test]
    fn bracket_pairs_ignores_stray_close() {
        let stream = InstructionStream::from_source("[]]");
        let pairs = bracket_pairs(&stream);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[&0], 1);
    }

    #[test]
    fn parse_resolves_jump_targets() {
        let program = Program::from_source("[-]").unwrap();
        assert_eq!(
            program.instructions(),
            [
                Instruction::JumpIfZero(2),
                Instruction::Decrement,
                Instruction::JumpIfNonZero(0),
            ]
        );
    }

    #[test]
    fn parse_resolves_nested_jump_targets() {
        let program = Program::from_source("+[>[-]<]").unwrap();
        assert_eq!(program.instructions()[1], Instruction::JumpIfZero(7));
        assert_eq!(program.instructions()[3], Instruction::JumpIfZero(5));
        assert_eq!(program.instructions()[5], Instruction::JumpIfNonZero(3));
        assert_eq!(program.instructions()[7], Instruction::JumpIfNonZero(1));
    }

    #[test]
    fn program_has_one_instruction_per_stream_position() {
        // Jump targets and error positions both index the stream, so the
        // lowering may never skip a position.
        let stream = InstructionStream::from_source("+[>.<,-]");
        let program = Program::parse(&stream).unwrap();
        assert_eq!(program.len(), stream.len());
    }

    #[test]
    fn parse_of_commented_source_equals_parse_of_clean_source() {
        let commented = Program::from_source("loop: [ minus - ] done").unwrap();
        let clean = Program::from_source("[-]").unwrap();
        assert_eq!(commented, clean);
    }

    #[test]
    fn unmatched_open_is_reported_at_its_position() {
        let err = Program::from_source("[+").unwrap_err();
        assert!(matches!(
            err,
            Error::UnmatchedBracket {
                position: 0,
                kind: BracketKind::Open,
            }
        ));
    }

    #[test]
    fn open_bracket_in_final_position_is_unmatched() {
        let err = Program::from_source("+[").unwrap_err();
        assert!(matches!(
            err,
            Error::UnmatchedBracket {
                position: 1,
                kind: BracketKind::Open,
            }
        ));
    }

    #[test]
    fn stray_close_is_reported_at_its_position() {
        let err = Program::from_source("+]").unwrap_err();
        assert!(matches!(
            err,
            Error::UnmatchedBracket {
                position: 1,
                kind: BracketKind::Close,
            }
        ));
    }

    #[test]
    fn positions_index_the_cleaned_stream_not_the_raw_source() {
        // Three comment characters precede the bracket in the raw text.
        let err = Program::from_source("abc[+").unwrap_err();
        assert!(matches!(
            err,
            Error::UnmatchedBracket {
                position: 0,
                kind: BracketKind::Open,
            }
        ));
    }

    #[test]
    fn empty_source_parses_to_an_empty_program() {
        let program = Program::from_source("no instructions here").unwrap();
        assert!(program.is_empty());
    }
}
