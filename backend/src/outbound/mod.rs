//! Outbound adapters implementing the driven ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel.
//! - **memory**: a process-local store with the same semantics, used when no
//!   database is configured and by tests.
//!
//! Adapters translate between domain types and storage representations and
//! hold no business logic.

pub mod memory;
pub mod persistence;
