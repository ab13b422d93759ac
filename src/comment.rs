//! Comment containers attached to TOML values.
//!
//! A document either keeps the comments the parser saw or throws them away
//! wholesale; the choice is made once per document, not per value. Both
//! policies share one type so the serializer can stay agnostic:
//! [`Comments::Discard`] renders to nothing, [`Comments::Preserve`] holds an
//! ordered list of comment lines that are written back above their value.
//!
//! Each preserved entry is a single logical line without its terminating
//! newline. A leading `#` is optional; the serializer adds one if missing.
//!
//! ## Examples
//!
//! ```rust
//! use toml_fmt::{to_string, Comments, TomlSpec, Value};
//!
//! let value = Value::table(
//!     [("answer".to_string(), Value::integer(42).with_comments(["the usual"]))]
//!         .into_iter()
//!         .collect(),
//! );
//! let text = to_string(&value, TomlSpec::default()).unwrap();
//! assert_eq!(text, "#the usual\nanswer = 42\n");
//! # let _ = Comments::Discard;
//! ```

/// The comment policy and payload of a single value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Comments {
    /// Comments were dropped; nothing is emitted.
    #[default]
    Discard,
    /// Comments are kept in order, one logical line per entry.
    Preserve(Vec<String>),
}

impl Comments {
    /// Wraps a list of comment lines in the preserving variant.
    #[must_use]
    pub fn preserve<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Comments::Preserve(lines.into_iter().map(Into::into).collect())
    }

    /// Returns `true` if rendering this container emits nothing.
    ///
    /// The discarding variant is always empty; the preserving variant is
    /// empty when it holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Comments::Discard => true,
            Comments::Preserve(lines) => lines.is_empty(),
        }
    }

    /// Appends a comment line to a preserving container.
    ///
    /// A discarding container stays discarding; the line is dropped.
    pub fn push(&mut self, line: impl Into<String>) {
        if let Comments::Preserve(lines) = self {
            lines.push(line.into());
        }
    }

    /// The preserved lines, or `None` for the discarding variant.
    #[must_use]
    pub fn lines(&self) -> Option<&[String]> {
        match self {
            Comments::Discard => None,
            Comments::Preserve(lines) => Some(lines),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discard_is_always_empty() {
        let mut c = Comments::Discard;
        c.push("ignored");
        assert!(c.is_empty());
        assert_eq!(c.lines(), None);
    }

    #[test]
    fn preserve_keeps_order() {
        let mut c = Comments::preserve(["first"]);
        c.push("second");
        assert!(!c.is_empty());
        assert_eq!(
            c.lines().unwrap(),
            &["first".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn preserve_without_lines_is_empty() {
        assert!(Comments::Preserve(Vec::new()).is_empty());
    }
}
