use crate::indicated_msg;
use thiserror::Error;

/// The fatal errors of decoding.
///
/// A decode either returns the whole tree or one of these, never a partial tree.
/// Lines with a mismatched structure are not errors, they are skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// An alias refers to an anchor that was never defined before it.
    #[error("unresolved alias `*{name}` at line {line}")]
    UnresolvedAlias { name: String, line: usize },

    /// An inline `[...]` or `{...}` token can not be coerced by either path.
    #[error("malformed inline collection `{token}` at line {line}")]
    MalformedInlineCollection { token: String, line: usize },
}

impl DecodeError {
    /// The line number where the error occurred, starts from 1.
    pub fn line(&self) -> usize {
        match self {
            Self::UnresolvedAlias { line, .. } | Self::MalformedInlineCollection { line, .. } => {
                *line
            }
        }
    }

    /// The error message with the source line indicated.
    ///
    /// ```
    /// use weak_yaml::parse;
    /// let doc = "a: 1\nb: *x\n";
    /// let e = parse(doc).unwrap_err();
    /// assert_eq!(e.indicated(doc), "unresolved alias `*x` at line 2\n\n2:1\nb: *x\n^");
    /// ```
    pub fn indicated(&self, doc: &str) -> String {
        format!("{}\n\n{}", self, indicated_msg(doc, self.line()))
    }

    /// Attach the line number, the scalar coercion does not know it.
    pub(crate) fn at(self, line: usize) -> Self {
        match self {
            Self::UnresolvedAlias { name, .. } => Self::UnresolvedAlias { name, line },
            Self::MalformedInlineCollection { token, .. } => {
                Self::MalformedInlineCollection { token, line }
            }
        }
    }
}
