//! Top-level command families.

pub mod docs;
pub mod tokens;
