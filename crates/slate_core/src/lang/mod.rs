//! Registry-backed language vocabulary.
//!
//! ## Modules
//! - `tokens` - Token kinds and their canonical spellings

pub mod tokens;
