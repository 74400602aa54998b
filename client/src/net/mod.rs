//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the single typed client for the analysis backend. Wire types and
//! the error taxonomy live in the shared `reports` crate.

pub mod api;
