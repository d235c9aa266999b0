//! Integration test suite for the Watson runtime
//!
//! This crate provides integration tests that verify components work
//! together correctly across component boundaries, plus the small helpers
//! the suites share.

use core_types::Value;
use notation::{encoder, Lexer, Unlexer};
use stack_machine::VM;

/// Re-export components for test convenience
pub mod components {
    pub use core_types;
    pub use instruction_set;
    pub use notation;
    pub use serializer;
    pub use stack_machine;
}

/// Decode a Watson byte stream: lex, execute, take the top of the stack.
///
/// Panics on malformed input; the test suites only feed streams produced
/// by the encoder or written by hand to be well formed.
pub fn decode(bytes: &[u8]) -> Value {
    let mut lexer = Lexer::new(bytes);
    let mut vm = VM::new();
    while let Some(op) = lexer.next_op().expect("reading from a slice cannot fail") {
        vm.feed(op).expect("malformed instruction stream");
    }
    vm.into_top().expect("stream left the stack empty")
}

/// Encode a value into its Watson byte spelling.
pub fn encode_to_bytes(value: &Value) -> Vec<u8> {
    let mut out = Unlexer::new(Vec::new());
    encoder::encode(value, &mut out).expect("writing to a vec cannot fail");
    out.into_inner()
}
