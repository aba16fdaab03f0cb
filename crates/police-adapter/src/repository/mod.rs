//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from police-domain.

pub mod in_memory;

// TODO: add a Postgres-backed RecordStore behind the same traits
