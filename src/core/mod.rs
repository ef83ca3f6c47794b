//! # Core Menu Logic
//!
//! Parsing and navigation. Knows nothing about terminals or windows.
//!
//! ```text
//!        content file
//!             │
//!             ▼
//!     ┌───────────────┐       ┌──────────────────────────┐
//!     │    parser     │──────▶│   Forest (node model)    │
//!     └───────────────┘       └────────────┬─────────────┘
//!                                          ▼
//!                             ┌──────────────────────────┐
//!     Action ────────────────▶│   Menu (state machine)   │──▶ Outcome
//!                             └────────────┬─────────────┘
//!                                          ▼
//!                                  CommandExecutor
//! ```
//!
//! ## Modules
//!
//! - [`node`]: `Directory`, `Entry` and the `Forest` that owns them
//! - [`parser`]: content text → `Forest`
//! - [`state`]: the `Menu` cursor, breadcrumb and activation rules
//! - [`action`]: the `Action` enum and `Outcome` of applying one
//! - [`executor`]: where `act(...)` commands go
//! - [`config`]: host settings (`config.toml`)

pub mod action;
pub mod config;
pub mod executor;
pub mod node;
pub mod parser;
pub mod state;
