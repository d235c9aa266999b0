//! Watson lexer - converts a byte stream into instructions.

use std::io::{self, Read};

use instruction_set::Op;

use crate::alphabet::{op_for_byte, Mode};
use crate::tracker::ModeTracker;

/// Converts a Watson byte stream into a sequence of instructions.
///
/// Bytes are read one at a time and looked up in the alphabet selected by
/// the current [`Mode`]; bytes outside the alphabet are skipped silently,
/// so whitespace, commentary, and framing are all legal. The mode starts
/// at A and switches to S for the bytes of an object key: a key begins at
/// an `Snew` read while an object is on top of the stack, and ends at the
/// first instruction outside the string-building family. The unlexer runs
/// the identical rule, so both directions agree byte for byte.
///
/// # Examples
///
/// ```
/// use instruction_set::Op;
/// use notation::{Lexer, Mode};
///
/// let mut lexer = Lexer::new(&b"~?"[..]);
/// assert_eq!(lexer.next_op().unwrap(), Some(Op::Onew));
/// assert_eq!(lexer.next_op().unwrap(), Some(Op::Snew));
/// // The Snew began an object key: its bytes now spell the S alphabet.
/// assert_eq!(lexer.mode(), Mode::S);
/// ```
#[derive(Debug)]
pub struct Lexer<R> {
    reader: R,
    tracker: ModeTracker,
}

impl<R: Read> Lexer<R> {
    /// Create a lexer reading Watson notation from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            tracker: ModeTracker::new(),
        }
    }

    /// The mode the next byte will be read in.
    pub fn mode(&self) -> Mode {
        self.tracker.mode()
    }

    /// Returns the next instruction, or `None` at end of stream.
    ///
    /// # Errors
    ///
    /// I/O errors from the underlying reader are surfaced unchanged;
    /// interrupted reads are retried.
    pub fn next_op(&mut self) -> io::Result<Option<Op>> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    if let Some(op) = op_for_byte(self.tracker.mode(), buf[0]) {
                        self.tracker.process(op);
                        return Ok(Some(op));
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Drain the remaining stream into a vector of instructions.
    pub fn remaining_ops(&mut self) -> io::Result<Vec<Op>> {
        let mut ops = Vec::new();
        while let Some(op) = self.next_op()? {
            ops.push(op);
        }
        Ok(ops)
    }
}
