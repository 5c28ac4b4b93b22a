//! Networking modules for the admin REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` executes planned requests from `resource::request` against the
//! API origin; `error` is the shared failure type at that boundary.

pub mod api;
pub mod error;
