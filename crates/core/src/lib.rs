//! Pure domain logic for the Mastery backend.
//!
//! No I/O lives here: the scoring engine, shared types, the error taxonomy,
//! and account field validation are all synchronous and side-effect free so
//! the `db` and `api` crates can depend on them without pulling in a runtime.

pub mod account;
pub mod error;
pub mod scoring;
pub mod types;
