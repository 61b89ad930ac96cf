//! # Addrbook Architecture
//!
//! Addrbook is a contacts and notes manager driven from an interactive prompt.
//! The prompt is one client of the library; everything it does goes through
//! [`api::AddrBookApi`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Process arguments, the REPL loop, tables and colours     │
//! │  - Turns every error into one line for the user             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store, the loaded books and the config          │
//! │  - Parses note ids, picks the birthday window               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validate, then mutate; return CmdResult                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (fields, model, book, notebook, birthdays)          │
//! │  - Validated field types, Record, Note and the two books    │
//! └─────────────────────────────────────────────────────────────┘
//!
//!          Storage (store/): DataStore, FileStore, InMemoryStore
//! ```
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward, code never writes to stdout or stderr, never exits the
//! process and never reads the clock: the date used for birthday lookups is an
//! argument. Diagnostics go through `tracing`.
//!
//! ## Module Overview
//!
//! - [`fields`]: Validated values (`Name`, `Phone`, `Email`, `Address`, `Birthday`, `Tag`)
//! - [`model`]: `Record` and `Note`
//! - [`book`]: `AddressBook`, contacts keyed by name
//! - [`notebook`]: `NoteBook`, notes keyed by id
//! - [`birthdays`]: The upcoming-birthday query
//! - [`commands`]: One module per command family
//! - [`api`]: The API facade
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration stored next to the data
//! - [`init`]: Data directory resolution and start-up
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the REPL and rendering for the binary (not part of the lib API)

pub mod api;
pub mod birthdays;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod init;
pub mod model;
pub mod notebook;
pub mod store;
