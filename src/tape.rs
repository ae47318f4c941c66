//! The memory tape: a fixed-size array of byte cells and a movable pointer.

use crate::error::Error;

/// Number of cells a [`Tape`] holds unless a custom length is given.
pub const DEFAULT_TAPE_LEN: usize = 30_000;

/// A fixed-size tape of `u8` cells with a single data pointer.
///
/// The pointer moves are clamped: `>` at the last cell and `<` at cell 0
/// leave the pointer where it is rather than wrapping, growing, or failing.
/// Cell access is bounds-checked independently of the clamp; `read` and
/// `write` fail with [`Error::OutOfBounds`] if the pointer does not index
/// into the cell storage at the moment of access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<u8>,
    pointer: usize,
}

impl Tape {
    /// Create a tape of [`DEFAULT_TAPE_LEN`] zeroed cells.
    pub fn new() -> Self {
        Self::with_len(DEFAULT_TAPE_LEN)
    }

    /// Create a tape of `len` zeroed cells.
    pub fn with_len(len: usize) -> Self {
        Self {
            cells: vec![0; len],
            pointer: 0,
        }
    }

    /// Move the pointer one cell to the right, clamped to the last cell.
    pub fn move_right(&mut self) {
        if self.pointer + 1 < self.cells.len() {
            self.pointer += 1;
        }
    }

    /// Move the pointer one cell to the left, clamped to cell 0.
    pub fn move_left(&mut self) {
        self.pointer = self.pointer.saturating_sub(1);
    }

    /// Add 1 to the current cell, wrapping at 8 bits.
    pub fn increment(&mut self) -> Result<(), Error> {
        let value = self.read()?;
        self.write(value.wrapping_add(1))
    }

    /// Subtract 1 from the current cell, wrapping at 8 bits.
    pub fn decrement(&mut self) -> Result<(), Error> {
        let value = self.read()?;
        self.write(value.wrapping_sub(1))
    }

    /// Return the value of the current cell.
    pub fn read(&self) -> Result<u8, Error> {
        self.cells
            .get(self.pointer)
            .copied()
            .ok_or(Error::OutOfBounds {
                index: self.pointer,
                len: self.cells.len(),
            })
    }

    /// Store `value` into the current cell.
    pub fn write(&mut self, value: u8) -> Result<(), Error> {
        let len = self.cells.len();
        match self.cells.get_mut(self.pointer) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(Error::OutOfBounds {
                index: self.pointer,
                len,
            }),
        }
    }

    /// Current pointer position.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Number of cells on the tape.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the tape has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}
