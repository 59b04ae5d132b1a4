//! This module supports the creation of tests and examples.

use std::fmt::Debug;

/// Prints `msg`, `left`, `right`, and then
/// asserts equality of `left` and `right` with `msg` as the assert message.
pub fn assert_eq_and_println<T: PartialEq + Debug>(left: T, right: T, msg: &str) {
    println!("{msg} - left={left:?}; right={right:?}");
    assert_eq!(left, right, "{msg}");
}
