// src/core/mod.rs

pub mod consume;
pub mod html;
pub mod sanitize;
pub mod sel;

pub use consume::{TableRow, consume_row, consume_select, consume_table};
pub use html::Dom;
pub use sel::{Sel, Sels};
