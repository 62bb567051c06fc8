//! Error types for building and editing dot-ora documents

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DotOraError>;

#[derive(Debug, Error)]
pub enum DotOraError {
    /// The document uses a directive this engine cannot honour (file inclusion)
    #[error("unsupported directive {directive} at line {line}")]
    UnsupportedDirective { directive: String, line: usize },

    #[error("child {segment} not found (path {path})")]
    ChildNotFound { segment: String, path: String },

    #[error("alias {0} not found")]
    AliasNotFound(String),

    #[error("empty parameter path")]
    EmptyPath,

    /// A matched parameter is not enclosed by `(` and `)` siblings
    #[error("parameter {name} is not enclosed in parentheses, refusing to delete it")]
    MalformedBrackets { name: String },

    #[error("parameter {name} holds nested parameters, not a single value")]
    NotScalar { name: String },

    #[error("parameter {name} holds a single value, it cannot contain {child}")]
    NotAGroup { name: String, child: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_culprit() {
        let err = DotOraError::ChildNotFound {
            segment: "MISSING".to_string(),
            path: "MISSING/X".to_string(),
        };
        assert_eq!(err.to_string(), "child MISSING not found (path MISSING/X)");

        let err = DotOraError::UnsupportedDirective {
            directive: "IFILE".to_string(),
            line: 3,
        };
        assert_eq!(err.to_string(), "unsupported directive IFILE at line 3");
    }

    #[test]
    fn test_io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: DotOraError = io.into();
        assert!(matches!(err, DotOraError::Io(_)));
    }
}
