//! Native operations exposed on `Libclang`.
//!
//! Each operation invokes exactly one libclang entry point. Arguments are
//! forwarded as given; string results are copied out and released before the
//! call returns.

mod options;
mod process;
mod text;
mod usr;
