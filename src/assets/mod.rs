//! Mesh file I/O.

pub mod off;

pub use off::{export_off, import_off, parse_off};
