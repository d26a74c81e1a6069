//! Domain logic shared across the PXL Studio backend: error taxonomy,
//! sequential identifier generation, cascade bookkeeping, and payload guards.

pub mod cascade;
pub mod error;
pub mod ident;
pub mod payload;
pub mod roles;
pub mod types;
