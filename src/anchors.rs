use crate::{parser::DecodeError, Map, Yaml};
use std::collections::HashMap;

/// The anchor table of one decode call.
///
/// Every lookup returns a deep copy, so the aliased branches never share data.
#[derive(Default, Debug)]
pub struct Anchors(HashMap<String, Yaml>);

impl Anchors {
    /// Bind a name to the completed value. A later anchor with the same name wins.
    pub fn insert(&mut self, name: String, yaml: &Yaml) {
        self.0.insert(name, yaml.clone());
    }

    /// Return a copy of the anchored value.
    ///
    /// ```
    /// use weak_yaml::{anchors::Anchors, parser::DecodeError, Yaml};
    /// let mut anchors = Anchors::default();
    /// anchors.insert("a".into(), &Yaml::from(1));
    /// assert_eq!(Ok(Yaml::from(1)), anchors.resolve("a", 3));
    /// assert_eq!(
    ///     Err(DecodeError::UnresolvedAlias { name: "b".into(), line: 3 }),
    ///     anchors.resolve("b", 3)
    /// );
    /// ```
    pub fn resolve(&self, name: &str, line: usize) -> Result<Yaml, DecodeError> {
        self.0
            .get(name)
            .cloned()
            .ok_or_else(|| DecodeError::UnresolvedAlias {
                name: name.to_string(),
                line,
            })
    }

    /// Number of anchors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check there is no anchor.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Split the anchor declaration `&name` from a value position.
pub(crate) fn split_anchor(token: &str) -> (Option<String>, &str) {
    let Some(rest) = token.strip_prefix('&') else {
        return (None, token);
    };
    let (name, rest) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    if name.is_empty() {
        (None, token)
    } else {
        (Some(name.to_string()), rest.trim())
    }
}

/// The name of an alias `*name`.
pub(crate) fn alias_name(token: &str) -> Option<&str> {
    token
        .strip_prefix('*')
        .filter(|name| !name.is_empty() && !name.contains(char::is_whitespace))
}

/// Splice the merged entries, the keys already in the target are kept.
pub(crate) fn merge(target: &mut Map, source: Map) {
    for (k, v) in source {
        if !target.contains_key(&k) {
            target.insert(k, v);
        }
    }
}
