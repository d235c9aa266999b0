//! Mode tracking shared by the lexer and unlexer.

use instruction_set::Op;

use crate::alphabet::Mode;

/// What the tracker remembers about a stack slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Object,
    Other,
}

/// Drives mode switching from the instruction stream.
///
/// Both directions of the notation run the same tracker over the
/// instructions they produce or consume, so every byte is spelled and read
/// in the same mode. The tracker keeps a shape-only shadow of the machine
/// stack: enough to recognize an `Snew` executing on top of an object,
/// which is where a key begins. The key's bytes are spelled in mode S; the
/// first instruction outside the string-building family ends the key and
/// restores the enclosing mode. The encoder separates a key from its value
/// with a pair of `Gswp` instructions, which leaves the stack unchanged
/// and keeps numeric values, whose instructions are otherwise
/// indistinguishable from key digits, in the enclosing mode.
#[derive(Debug)]
pub(crate) struct ModeTracker {
    mode: Mode,
    restore: Mode,
    in_key: bool,
    shadow: Vec<Slot>,
}

impl ModeTracker {
    pub(crate) fn new() -> Self {
        Self {
            mode: Mode::A,
            restore: Mode::A,
            in_key: false,
            shadow: Vec::new(),
        }
    }

    /// The mode in effect for the next byte.
    pub(crate) fn mode(&self) -> Mode {
        self.mode
    }

    /// Account for one instruction that was just read or written.
    ///
    /// The instruction itself was spelled in the mode that was current
    /// before this call; any switch it causes applies from the next byte.
    pub(crate) fn process(&mut self, op: Op) {
        if self.in_key && !is_string_building(op) {
            self.in_key = false;
            self.mode = self.restore;
        } else if !self.in_key && op == Op::Snew && self.shadow.last() == Some(&Slot::Object) {
            self.restore = self.mode;
            self.mode = Mode::S;
            self.in_key = true;
        }
        self.apply(op);
    }

    /// Mirror the instruction's stack shape. Pops on an empty shadow are
    /// ignored; a stream that underflows errors in the machine, not here.
    fn apply(&mut self, op: Op) {
        match op {
            Op::Inew | Op::Finf | Op::Fnan | Op::Snew | Op::Anew | Op::Bnew | Op::Nnew => {
                self.shadow.push(Slot::Other);
            }
            Op::Onew => self.shadow.push(Slot::Object),
            Op::Iinc | Op::Ishl | Op::Ineg | Op::Itof | Op::Itou | Op::Fneg | Op::Bneg => {
                self.shadow.pop();
                self.shadow.push(Slot::Other);
            }
            Op::Iadd | Op::Isht | Op::Sadd | Op::Aadd => {
                self.shadow.pop();
                self.shadow.pop();
                self.shadow.push(Slot::Other);
            }
            Op::Oadd => {
                self.shadow.pop();
                self.shadow.pop();
                self.shadow.pop();
                self.shadow.push(Slot::Object);
            }
            Op::Gdup => {
                if let Some(&top) = self.shadow.last() {
                    self.shadow.push(top);
                }
            }
            Op::Gpop => {
                self.shadow.pop();
            }
            Op::Gswp => {
                let len = self.shadow.len();
                if len >= 2 {
                    self.shadow.swap(len - 1, len - 2);
                }
            }
        }
    }
}

/// Instructions that can appear inside a key once its string is begun.
fn is_string_building(op: Op) -> bool {
    matches!(
        op,
        Op::Inew | Op::Iinc | Op::Ishl | Op::Iadd | Op::Ineg | Op::Isht | Op::Sadd
    )
}
