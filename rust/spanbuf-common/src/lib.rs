//! Core definitions (error taxonomy and result alias), relied upon by the spanbuf crates.

pub mod error;
pub mod result;

pub use result::Result;
