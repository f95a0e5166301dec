//! Piezas (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as `piezas::{core,input,term,types}`
//! and holds what the terminal game needs on top of them: environment config,
//! the move log and the hot-seat session.

pub mod config;
pub mod move_log;
pub mod session;

pub use piezas_core as core;
pub use piezas_input as input;
pub use piezas_term as term;
pub use piezas_types as types;
