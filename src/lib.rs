#![deny(clippy::unwrap_used)]
#![doc = include_str!("../README.md")]

#[doc(hidden)]
pub mod test_support;

pub mod array;
pub mod collector;
pub mod partition;
pub mod scan;
pub mod search;
