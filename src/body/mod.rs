//! Compiled calculation body: the backend-ready request payload.

pub mod types;

pub use types::*;
