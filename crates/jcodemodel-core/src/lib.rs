#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the jcodemodel crates.
//!
//! - **Name table** (`NameTable`, `NameId`): package and class names are
//!   stored once per code model and keyed by index.
//! - **Names** (`names`): lexical rules for Java identifiers and dotted names.
//! - **Colors** (`Colors`): ANSI palette for terminal rendering.

mod colors;
mod name_table;
pub mod names;

pub use colors::Colors;
pub use name_table::{NameId, NameTable};

#[cfg(test)]
mod name_table_tests;
#[cfg(test)]
mod names_tests;
