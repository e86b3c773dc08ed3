//! Core domain types and gateway contracts for the stockroom catalog.
//!
//! This crate is pure: it defines the `Item` entity and its lifecycle rules,
//! the repository and cache traits the service crate implements, and the
//! pure functions (draft application, ordering, cache serialization, error
//! mapping) shared by every backend. It performs no I/O of its own.

pub mod cache;
pub mod item;
pub mod storage;
