//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls behind sidebar mutations.

pub mod api;
