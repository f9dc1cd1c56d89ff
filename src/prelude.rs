//! Derive macros shared by the calendar types.
//!
//! Every enum and date type formats through `derive_more::Display`.

pub use derive_more::Display;
