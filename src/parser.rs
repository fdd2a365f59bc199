//! Parsers.
//!
//! Nothing here validates the full URL grammar: the splitters only find the
//! component boundaries, and the value types decide what is acceptable.

pub(crate) mod char;
pub(crate) mod str;
pub(crate) mod trusted;
