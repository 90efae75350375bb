//! Primitive validators
//!
//! One stateless checker per value kind. Every operation either returns
//! `Ok(())` or exactly one [`ValidationError`](crate::errors::ValidationError)
//! tagged with the caller's [`Target`](crate::target::Target).

pub mod date_time;
pub mod enumerable;
pub mod integer;
pub mod object;
pub mod string;

pub use date_time::{DateTimeValidator, StandardDateTimeValidator};
pub use enumerable::{EnumerableValidator, StandardEnumerableValidator};
pub use integer::{IntegerValidator, StandardIntegerValidator};
pub use object::{ObjectValidator, StandardObjectValidator};
pub use string::{StandardStringValidator, StringValidator};
