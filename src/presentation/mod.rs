//! Terminal presentation of contact lists.

pub mod table;

pub use table::{render, RULE_WIDTH};
