//! Reflective bridge between host values and Watson values.
//!
//! Any type implementing `serde::Serialize` converts into a
//! [`core_types::Value`], and any `serde::Deserialize` type converts back.
//! Field-level control (key renaming, omission, inlining) rides on serde's
//! field attributes, and a hand-written `Serialize` impl takes the place of
//! a marshal capability: it preempts structural conversion entirely, while
//! `Option::None` still short-circuits to `Nil` before any impl runs.
//!
//! # Overview
//!
//! - [`to_value`] - Host value -> Watson value
//! - [`from_value`] - Watson value -> host value
//! - [`Error`] - Conversion failures
//!
//! # Examples
//!
//! ```
//! use core_types::Value;
//! use serializer::{from_value, to_value};
//!
//! let value = to_value(&vec![1u64, 2, 3]).unwrap();
//! assert_eq!(
//!     value,
//!     Value::Array(vec![Value::Uint(1), Value::Uint(2), Value::Uint(3)])
//! );
//!
//! let back: Vec<u64> = from_value(value).unwrap();
//! assert_eq!(back, vec![1, 2, 3]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod de;
mod error;
mod ser;

pub use de::from_value;
pub use error::Error;
pub use ser::to_value;
