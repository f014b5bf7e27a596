//! Deterministic sequencing and CSV serialization.
//!
//! Same input set and same transition-table version must produce
//! byte-identical output; downstream hash verification depends on it. The
//! table is rendered fully in memory and written in a single whole-file
//! write, so no partial output exists on any failure path.

pub mod writer;

pub use writer::{OutputError, render_table, sequence, write_table};
