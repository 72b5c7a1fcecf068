//! Host-side value types returned by the binding.
//!
//! # Responsibility
//! - Give semantic types to the raw strings and bitmasks libclang returns.
//!
//! # Invariants
//! - Values round-trip to the exact native representation (`as_str`, `bits`).

pub mod options;
pub mod usr;
