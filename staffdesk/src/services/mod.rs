//! Domain services
//!
//! Validation and mutation rules for each record type. Every function works
//! on a `&Collections` / `&mut Collections` and the calling account; the
//! caller owns persistence (see [`crate::db::Store::transact`]), so a
//! returned error means nothing was changed.

pub mod accounts;
pub mod departments;
pub mod employees;
pub mod filter;
pub mod requests;

pub use filter::TextFilter;
