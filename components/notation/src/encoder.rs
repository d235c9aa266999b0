//! Encoder - emits the instruction sequence that rebuilds a value.
//!
//! The encoder is the inverse of machine execution: running its output on
//! an empty machine leaves exactly the encoded value on top of the stack.
//! Output is deterministic; object entries are emitted in the map's
//! byte-lexicographic key order, each key separated from its value by a
//! stack-neutral pair of `Gswp` instructions. That separator is what lets
//! the notation keep key bytes in the S alphabet and value bytes in the
//! enclosing one: without it, a numeric value's instructions could not be
//! told apart from the digits of the key still being built.

use std::io::{self, Write};

use core_types::Value;
use instruction_set::Op;

use crate::Unlexer;

/// Encode a value and write its byte spelling through an unlexer.
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use notation::{encoder, Unlexer};
///
/// let mut out = Unlexer::new(Vec::new());
/// encoder::encode(&Value::Int(2), &mut out).unwrap();
/// assert_eq!(out.into_inner(), b"Bub");
/// ```
pub fn encode<W: Write>(value: &Value, out: &mut Unlexer<W>) -> io::Result<()> {
    out.write_ops(&encode_to_ops(value))
}

/// Emit the instruction sequence whose execution rebuilds `value`.
pub fn encode_to_ops(value: &Value) -> Vec<Op> {
    let mut ops = Vec::new();
    emit_value(value, &mut ops);
    ops
}

fn emit_value(value: &Value, ops: &mut Vec<Op>) {
    match value {
        Value::Int(n) => emit_int(*n, ops),
        Value::Uint(n) => {
            emit_bit_pattern(*n, ops);
            ops.push(Op::Itou);
        }
        Value::Float(x) => emit_float(*x, ops),
        Value::String(s) => emit_bytes(s, ops),
        Value::Object(entries) => {
            ops.push(Op::Onew);
            for (key, val) in entries {
                emit_bytes(key, ops);
                // Two swaps leave the stack unchanged and mark where the
                // key ends.
                ops.push(Op::Gswp);
                ops.push(Op::Gswp);
                emit_value(val, ops);
                ops.push(Op::Oadd);
            }
        }
        Value::Array(elements) => {
            ops.push(Op::Anew);
            for elem in elements {
                emit_value(elem, ops);
                ops.push(Op::Aadd);
            }
        }
        Value::Bool(b) => {
            ops.push(Op::Bnew);
            if *b {
                ops.push(Op::Bneg);
            }
        }
        Value::Nil => ops.push(Op::Nnew),
    }
}

/// Build a signed integer: magnitude bits wrapped in `Ineg` for negatives.
/// `i64::MIN` has no representable magnitude, so it is built from its raw
/// bit pattern instead (a single set sign bit).
fn emit_int(n: i64, ops: &mut Vec<Op>) {
    if n >= 0 || n == i64::MIN {
        emit_bit_pattern(n as u64, ops);
    } else {
        emit_bit_pattern(n.unsigned_abs(), ops);
        ops.push(Op::Ineg);
    }
}

fn emit_float(x: f64, ops: &mut Vec<Op>) {
    if x.is_nan() {
        ops.push(Op::Fnan);
    } else if x == f64::INFINITY {
        ops.push(Op::Finf);
    } else if x == f64::NEG_INFINITY {
        ops.push(Op::Finf);
        ops.push(Op::Fneg);
    } else {
        emit_bit_pattern(x.to_bits(), ops);
        ops.push(Op::Itof);
    }
}

fn emit_bytes(bytes: &[u8], ops: &mut Vec<Op>) {
    ops.push(Op::Snew);
    for &b in bytes {
        emit_bit_pattern(b as u64, ops);
        ops.push(Op::Sadd);
    }
}

/// Build the Int whose unsigned 64-bit reinterpretation equals `pattern`:
/// `Inew`, then the significant bits MSB->LSB as `Ishl` plus `Iinc` for set
/// bits. The left shift wraps through the sign bit, so all 64 positions
/// are reachable.
fn emit_bit_pattern(pattern: u64, ops: &mut Vec<Op>) {
    ops.push(Op::Inew);
    if pattern == 0 {
        return;
    }
    let top = 63 - pattern.leading_zeros();
    ops.push(Op::Iinc);
    for bit in (0..top).rev() {
        ops.push(Op::Ishl);
        if (pattern >> bit) & 1 == 1 {
            ops.push(Op::Iinc);
        }
    }
}
