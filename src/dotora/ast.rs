//! Parameter model for dot-ora files
//!
//! The parse tree is converted once into [ParameterNode]s: owned, ordered, mutable trees that
//! still remember which source lines they came from. All edits happen on this model.

pub mod error;
pub mod mutate;
pub mod node;
pub mod path;

pub use error::{DotOraError, Result};
pub use node::{LineNo, Literal, ParameterNode, Value, IFILE};
pub use path::split_path;
