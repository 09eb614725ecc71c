//! Derive macros shared by the calendar, range and catalog types.

pub use derive_more::{Deref, Display};
