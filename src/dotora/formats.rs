//! Output formats for inspecting a parsed document
//!
//! - treeviz: an indented tree with one line per parameter
//! - json / yaml: a serde dump of the parameter model

pub mod structured;
pub mod treeviz;

pub use structured::{to_json_str, to_yaml_str};
pub use treeviz::to_treeviz_str;
