//! Form fields and validation module.

pub use lemon_forms::*;
