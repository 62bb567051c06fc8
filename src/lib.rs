//! # dotora
//!
//! A lossless editor for Oracle network configuration files (`tnsnames.ora`, `sqlnet.ora`,
//! `listener.ora`).
//!
//! Documents are parsed into a tree of parameters, edited by alias, and written back with
//! every untouched line, comment and blank line exactly as it was.
//!
//! ```rust-example
//! use dotora::dotora::DotOraDocument;
//!
//! let mut doc = DotOraDocument::from_file("tnsnames.ora")?;
//! doc.upsert_param_path("ORCL/DESCRIPTION/ADDRESS/PORT", "1522");
//! if doc.changed() {
//!     std::fs::write("tnsnames.ora", doc.render())?;
//! }
//! ```
//!
//! ## Testing
//!
//! See the [testing module](dotora::testing) for the fluent assertions used across the tests.

pub mod dotora;
