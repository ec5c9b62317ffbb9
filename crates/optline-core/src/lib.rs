//! optline-core - Short/long option parsing with positional passthrough
//!
//! This crate provides a small declare-then-parse command line model. A
//! [`CommandLine`] owns a set of declared options (boolean toggles,
//! single-value options and comma-separated multi-value options, each with
//! optional defaults), parses an argument vector against them and returns
//! the remaining positional arguments. Declaration hands back cheap
//! read-handles for querying option state after a parse.

pub mod cmdline;
pub mod error;
pub mod options;
pub mod spec;

pub use cmdline::*;
pub use error::*;
pub use options::*;
pub use spec::*;
