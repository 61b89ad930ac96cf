//! # CLI Layer
//!
//! One client of the addrbook library: the interactive prompt. This is the only
//! code that reads stdin, writes stdout or decides the exit code.
//!
//! - `setup`: process arguments and the grammar of a prompt line (clap)
//! - `commands`: the REPL loop, dispatch to the API and error descriptions
//! - `render`: tables and coloured messages

pub mod commands;
pub mod render;
pub mod setup;
