//! Watson unlexer - writes the byte spelling of an instruction stream.

use std::io::{self, Write};

use instruction_set::Op;

use crate::alphabet::{byte_for_op, Mode};
use crate::tracker::ModeTracker;

/// Writes instructions as Watson notation bytes.
///
/// The inverse of [`crate::Lexer`]: each instruction is spelled as the
/// single byte fixed by the current mode, and the mode tracking follows
/// the identical rule from the written instructions, keeping both
/// directions in lockstep. Object-key bytes come out in the S alphabet;
/// everything else stays in the enclosing mode.
///
/// # Examples
///
/// ```
/// use instruction_set::Op;
/// use notation::Unlexer;
///
/// let mut out = Unlexer::new(Vec::new());
/// out.write_ops(&[Op::Onew, Op::Snew, Op::Inew]).unwrap();
/// // The Snew began a key, so Inew is spelled 'S'.
/// assert_eq!(out.into_inner(), b"~?S");
/// ```
#[derive(Debug)]
pub struct Unlexer<W> {
    writer: W,
    tracker: ModeTracker,
}

impl<W: Write> Unlexer<W> {
    /// Create an unlexer writing Watson notation to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            tracker: ModeTracker::new(),
        }
    }

    /// The mode the next instruction will be spelled in.
    pub fn mode(&self) -> Mode {
        self.tracker.mode()
    }

    /// Write the byte spelling of a single instruction.
    ///
    /// # Errors
    ///
    /// I/O errors from the underlying writer are surfaced unchanged.
    pub fn write_op(&mut self, op: Op) -> io::Result<()> {
        let byte = byte_for_op(self.tracker.mode(), op);
        self.writer.write_all(&[byte])?;
        self.tracker.process(op);
        Ok(())
    }

    /// Write a sequence of instructions in order.
    pub fn write_ops(&mut self, ops: &[Op]) -> io::Result<()> {
        for &op in ops {
            self.write_op(op)?;
        }
        Ok(())
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
