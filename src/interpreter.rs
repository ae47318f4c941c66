//! The execution engine: an index cursor over a parsed [`Program`].

use std::io::{Read, Write};

use crate::error::Error;
use crate::parser::{Instruction, InstructionStream, Program};
use crate::tape::Tape;

/// Executes Brainfuck programs against a memory tape.
///
/// The interpreter owns its [`Tape`] for its whole lifetime: successive
/// calls to [`execute`](Interpreter::execute) mutate the same cells, so
/// state carries over from one program to the next. The input and output
/// streams are injected at construction, which lets tests and embedders
/// substitute in-memory buffers for the process streams.
///
/// Behaviors:
/// - `.` writes the current cell to the output stream as one raw byte.
/// - `,` blocks for one byte of input; end of input stores 0.
/// - Loops run with precomputed jump targets; nesting costs no call stack.
/// - A program with any unmatched bracket fails before anything executes.
pub struct Interpreter<R, W> {
    tape: Tape,
    input: R,
    output: W,
}

impl<R: Read, W: Write> Interpreter<R, W> {
    /// Create an interpreter with a default 30,000-cell tape.
    pub fn new(input: R, output: W) -> Self {
        Self::with_tape(Tape::new(), input, output)
    }

    /// Create an interpreter running against the given tape.
    pub fn with_tape(tape: Tape, input: R, output: W) -> Self {
        Self {
            tape,
            input,
            output,
        }
    }

    /// The tape in its current state.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Clean `source`, parse it, and run it against the shared tape.
    pub fn execute(&mut self, source: &str) -> Result<(), Error> {
        let stream = InstructionStream::from_source(source);
        let program = Program::parse(&stream)?;
        self.run(&program)
    }

    /// Run an already-parsed program against the shared tape.
    pub fn run(&mut self, program: &Program) -> Result<(), Error> {
        let instructions = program.instructions();
        let mut cursor = 0;

        while cursor < instructions.len() {
            match instructions[cursor] {
                Instruction::MoveRight => self.tape.move_right(),
                Instruction::MoveLeft => self.tape.move_left(),
                Instruction::Increment => self.tape.increment()?,
                Instruction::Decrement => self.tape.decrement()?,
                Instruction::Output => {
                    let byte = self.tape.read()?;
                    self.output.write_all(&[byte])?;
                }
                Instruction::Input => {
                    let mut buf = [0u8; 1];
                    let byte = match self.input.read(&mut buf) {
                        Ok(0) => 0, // end of input
                        Ok(_) => buf[0],
                        Err(e) => return Err(Error::Io(e)),
                    };
                    self.tape.write(byte)?;
                }
                Instruction::JumpIfZero(target) => {
                    if self.tape.read()? == 0 {
                        cursor = target;
                    }
                }
                Instruction::JumpIfNonZero(target) => {
                    if self.tape.read()? != 0 {
                        cursor = target;
                    }
                }
            }
            // The jump targets land on the partner bracket itself; advancing
            // unconditionally steps past it, or into the loop body.
            cursor += 1;
        }

        Ok(())
    }
}
