//! Read-only catalog of PixelLingual translation packs.
//!
//! Pure query helpers over an immutable snapshot of pack records, plus the
//! static studio / section / tag directories and date-derived display values.
//! No I/O beyond parsing a record file handed in by the caller.

pub mod catalog;
pub mod date;
pub mod directory;
pub mod error;
pub mod pack;
pub mod search;
pub mod types;
pub mod view;
