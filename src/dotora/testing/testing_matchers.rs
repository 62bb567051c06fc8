//! Text matching helpers for assertions

use std::fmt;

/// Expected shape of rendered text
#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    Contains(String),
}

impl TextMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix.as_str()),
            TextMatch::Contains(needle) => actual.contains(needle.as_str()),
        }
    }

    /// Panic with both texts unless `actual` fits; `what` names the text being checked
    pub fn assert(&self, actual: &str, what: &str) {
        if !self.matches(actual) {
            panic!("{what} should {self}\n  actual: {actual:?}");
        }
    }
}

impl fmt::Display for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextMatch::Exact(text) => write!(f, "equal {text:?}"),
            TextMatch::StartsWith(text) => write!(f, "start with {text:?}"),
            TextMatch::Contains(text) => write!(f, "contain {text:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_reads_as_a_sentence() {
        let expected = TextMatch::StartsWith("A =".to_string());
        assert_eq!(expected.to_string(), "start with \"A =\"");
    }

    #[test]
    #[should_panic(expected = "alias A should contain \"PORT\"")]
    fn test_mismatch_names_the_text() {
        TextMatch::Contains("PORT".to_string()).assert("A = (HOST = x)", "alias A");
    }
}
