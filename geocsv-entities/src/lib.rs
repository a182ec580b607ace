#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # geocsv-entities
//!
//! Reusable, agnostic domain entities for geocsv.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod candidate;
pub mod geo;
pub mod layer;
pub mod point;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
