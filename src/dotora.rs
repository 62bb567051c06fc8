//! Main module for dotora library functionality
//!
//! The pipeline runs lexer → parser → ast → document. The serializer writes a document
//! back out, touching only the lines of the entries that were edited.

pub mod ast;
pub mod config;
pub mod document;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod persist;
pub mod serializer;
pub mod testing;

pub use ast::{DotOraError, LineNo, ParameterNode, Result, Value};
pub use document::{DotOraDocument, ALL_ALIASES};
