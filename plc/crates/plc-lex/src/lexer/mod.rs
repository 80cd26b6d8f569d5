//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch and the token loop
//! - `identifier` - Identifier lexing
//! - `number` - Integer and decimal literal lexing
//! - `string` - String and character literal lexing
//! - `operator` - Operator lexing

mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::{tokenize, Lexer};
pub use operator::COMPOUND_OPERATORS;
