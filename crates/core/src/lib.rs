//! Storefront Core - Shared catalog types library.
//!
//! This crate defines the canonical shape of a [`Product`] and a
//! [`Category`] for the rest of the storefront: UI components, state
//! stores, and API clients all agree on field names, presence/absence,
//! and coarse types by depending on these declarations.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no
//! HTTP clients. Decoding external data into these shapes (and rejecting
//! malformed data) is the job of whichever boundary produces the values;
//! the shapes themselves perform no validation.
//!
//! # Modules
//!
//! - [`types`] - The `Product` and `Category` records plus newtype IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
