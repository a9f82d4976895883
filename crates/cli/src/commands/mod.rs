//! Command implementations.
//!
//! Each command works on an open [`Session`](crate::session::Session) and
//! writes its human-readable output to the given writer.

pub mod cart;
pub mod catalog;
pub mod checkout;
