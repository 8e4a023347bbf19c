//! Networking modules for the remote authentication service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP gateway and its failure normalization, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
