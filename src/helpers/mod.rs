//! Display helpers for post data

mod date;

pub use date::*;
