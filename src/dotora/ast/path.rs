//! Slash-separated parameter paths, e.g. `DESCRIPTION/ADDRESS/PORT`

use super::error::{DotOraError, Result};

pub const SEPARATOR: char = '/';

/// Split a path into its segments
///
/// Surrounding whitespace is ignored; an empty path or an empty segment is an error.
pub fn split_path(path: &str) -> Result<Vec<&str>> {
    let path = path.trim().trim_matches(SEPARATOR);
    if path.is_empty() {
        return Err(DotOraError::EmptyPath);
    }

    let segments: Vec<&str> = path.split(SEPARATOR).map(str::trim).collect();
    match segments.iter().find(|segment| segment.is_empty()) {
        Some(_) => Err(DotOraError::ChildNotFound {
            segment: String::new(),
            path: path.to_string(),
        }),
        None => Ok(segments),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("PORT", vec!["PORT"])]
    #[case("DESCRIPTION/ADDRESS/PORT", vec!["DESCRIPTION", "ADDRESS", "PORT"])]
    #[case(" /CONNECT_DATA/ SID/ ", vec!["CONNECT_DATA", "SID"])]
    fn test_split_path(#[case] path: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_path(path).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("  ")]
    #[case("/")]
    fn test_empty_paths_are_rejected(#[case] path: &str) {
        assert!(matches!(split_path(path), Err(DotOraError::EmptyPath)));
    }

    #[test]
    fn test_empty_segment_is_rejected() {
        assert!(matches!(
            split_path("A//B"),
            Err(DotOraError::ChildNotFound { .. })
        ));
    }
}
