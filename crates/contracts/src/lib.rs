//! Shared domain types and logic for MS APP.
//!
//! Everything here is WASM-free so the state machines, fixtures and the
//! authorization table can be unit-tested on the host. The `frontend`
//! crate consumes these types and adds rendering plus localStorage
//! persistence.

pub mod domain;
pub mod system;
