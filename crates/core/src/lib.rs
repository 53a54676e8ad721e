//! Pure domain logic for the Slate production-management backend.
//!
//! This crate has zero internal dependencies so it can be used by the
//! API/repository layer and any future CLI tooling. Everything here is
//! synchronous arithmetic and validation over already-fetched data; no
//! I/O, no pool handles.

pub mod budget;
pub mod error;
pub mod schedule;
pub mod types;
