//! Watson stack machine.
//!
//! Executes [`instruction_set::Op`] sequences over a fixed-capacity value
//! stack. A byte stream decoded by the lexer and fed through [`VM::feed`]
//! leaves the decoded document as the single value on top of the stack.
//!
//! # Examples
//!
//! ```
//! use instruction_set::Op;
//! use core_types::Value;
//! use stack_machine::VM;
//!
//! let mut vm = VM::new();
//! vm.feed_multi(&[Op::Inew, Op::Iinc, Op::Ishl]).unwrap();
//! assert_eq!(vm.top(), Some(&Value::Int(2)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod vm;

pub use vm::{VM, DEFAULT_STACK_CAPACITY};
