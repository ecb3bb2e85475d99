//! Inbound adapters translating external requests into domain service calls.
//!
//! HTTP handlers live under [`http`].

pub mod http;
