//! Core types and utilities for the OID registry
//!
//! This crate provides the error type shared by every registry crate and the
//! hash/ordering primitives that both the table generator (build script) and
//! the runtime classifier rely on.

pub mod error;
pub mod search;

pub use error::{OidError, OidResult};
pub use search::{oid_hash, search_order};
