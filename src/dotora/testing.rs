//! Testing utilities for parsed documents
//!
//! Checking a parameter tree by hand means matching on [Value](crate::dotora::ast::Value)
//! sequences and skipping punctuation at every level. The fluent [assert_doc] API walks the
//! tree by name instead:
//!
//! ```rust-example
//! use crate::dotora::testing::assert_doc;
//!
//! assert_doc(&doc)
//!     .alias_count(2)
//!     .alias("ORCL", |orcl| {
//!         orcl.child("DESCRIPTION", |description| {
//!             description.child("ADDRESS", |address| {
//!                 address.child("PORT", |port| port.value("1521"));
//!             });
//!         });
//!     });
//! ```
//!
//! Every failure message carries the path walked so far, e.g. `ORCL/DESCRIPTION/ADDRESS`.

mod testing_assertions;
mod testing_matchers;

pub use testing_assertions::{assert_doc, DocumentAssertion, ParameterAssertion};
pub use testing_matchers::TextMatch;
