#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # campus-entities
//!
//! Reusable, agnostic domain entities for the campus places backend.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod activity;
pub mod approval;
pub mod campus;
pub mod catalog;
pub mod history;
pub mod id;
pub mod location;
pub mod place;
pub mod route;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
