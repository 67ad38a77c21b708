//! File parsers for localization tables.
//!
//! - `strings`: `.strings` key/value table parser

pub mod strings;
