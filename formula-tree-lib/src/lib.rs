//! Turns infix token sequences into trees of any type.
//!
//! See [`interpreter::FormulaTreeFactory`] for the entry point and
//! [`interpreter::arithmetic`] for a ready-made grammar.

pub mod interpreter;
