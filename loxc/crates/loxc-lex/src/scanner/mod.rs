//! Scanner module.
//!
//! This module organizes the scanner implementation into smaller, focused components:
//! - `core` - Main Scanner struct, whitespace loop and dispatch
//! - `identifier` - Identifier and keyword scanning
//! - `number` - Number literal scanning
//! - `string` - String literal scanning
//! - `operator` - One/two-character operator scanning
//! - `comment` - Line comment scanning

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Scanner;
