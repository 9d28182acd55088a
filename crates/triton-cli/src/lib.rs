//! Triton CLI library.
//!
//! Rendering helpers shared by the `triton-cli` subcommands: report types,
//! text and JSON output, and terminal styling.

pub mod output;
pub mod terminal;
