//! Core types for the storefront catalog.
//!
//! This module provides the shared record shapes and their type-safe IDs.

pub mod category;
pub mod id;
pub mod product;

pub use category::Category;
pub use id::*;
pub use product::Product;
