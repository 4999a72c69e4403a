//! countrycodes-rs
//! ===============
//!
//! Umbrella crate re-exporting [`countrycodes_core`]; it exists to host the
//! demos under `demos/`.

pub use countrycodes_core::*;
