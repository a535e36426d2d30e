//! Dumper components.
use crate::{parser::parse_primitive, Map, Seq, Yaml};
use std::borrow::Cow;

const INDENT: &str = "  ";

/// Leading characters that would start an anchor, an alias, a flow collection,
/// a block scalar or a quoted string.
const INDICATORS: &[char] = &['&', '*', '[', '{', '|', '>', '"', '\''];

fn pad(level: usize) -> String {
    INDENT.repeat(level)
}

/// Check the string must be wrapped in double quotes to keep its type and shape.
///
/// ```
/// use weak_yaml::dumper::need_quote;
/// assert!(need_quote("100"));
/// assert!(need_quote("TRUE"));
/// assert!(need_quote("localhost:8080"));
/// assert!(!need_quote("1.2.3"));
/// assert!(!need_quote("Buy groceries"));
/// ```
pub fn need_quote(s: &str) -> bool {
    s.is_empty()
        || s.eq_ignore_ascii_case("true")
        || s.eq_ignore_ascii_case("false")
        || s.eq_ignore_ascii_case("null")
        || is_numeral(s)
        || s.contains(':')
        || s.trim() != s
        || s.starts_with(INDICATORS)
        || s.starts_with("- ")
        || s == "-"
        || !matches!(parse_primitive(s), Ok(Yaml::Str(ref t)) if t == s)
}

/// Wrap the string in quotes, single quotes are used if it holds a double quote.
fn quote(s: &str) -> String {
    let q = if s.contains('"') && !s.contains('\'') { '\'' } else { '"' };
    format!("{q}{s}{q}")
}

/// Plain integer or decimal numeral, such as `-12` or `3.14`.
fn is_numeral(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    let (int, frac) = s.split_once('.').unwrap_or((s, "0"));
    let digits = |t: &str| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit());
    digits(int) && digits(frac)
}

/// Render a scalar. Containers only reach here when they are empty.
fn scalar(yaml: &Yaml) -> Cow<str> {
    match yaml {
        Yaml::Null => "null".into(),
        Yaml::Bool(b) => b.to_string().into(),
        Yaml::Number(n) => n.to_string().into(),
        Yaml::Str(s) if need_quote(s) => quote(s).into(),
        Yaml::Str(s) => s.as_str().into(),
        Yaml::Seq(_) => "[]".into(),
        Yaml::Map(_) => "{}".into(),
    }
}

fn key(k: &str) -> Cow<str> {
    if need_quote(k) {
        quote(k).into()
    } else {
        k.into()
    }
}

/// The interface for dumping data structure.
pub trait Dumper {
    /// Write the block at the indent level,
    /// and the first line starts with `lead` instead of the indent.
    fn dump(&self, doc: &mut String, lead: &str, level: usize);
}

impl Dumper for Map {
    fn dump(&self, doc: &mut String, lead: &str, level: usize) {
        for (i, (k, v)) in self.iter().enumerate() {
            if i == 0 {
                doc.push_str(lead);
            } else {
                doc.push_str(&pad(level));
            }
            doc.push_str(&key(k));
            doc.push(':');
            match v {
                Yaml::Seq(s) if !s.is_empty() => {
                    doc.push('\n');
                    s.dump(doc, &pad(level + 1), level + 1);
                }
                Yaml::Map(m) if !m.is_empty() => {
                    doc.push('\n');
                    m.dump(doc, &pad(level + 1), level + 1);
                }
                v => {
                    doc.push(' ');
                    doc.push_str(&scalar(v));
                    doc.push('\n');
                }
            }
        }
    }
}

impl Dumper for Seq {
    fn dump(&self, doc: &mut String, lead: &str, level: usize) {
        for (i, v) in self.iter().enumerate() {
            let marker = (if i == 0 { lead.to_string() } else { pad(level) }) + "-";
            match v {
                Yaml::Map(m) if !m.is_empty() => m.dump(doc, &(marker + " "), level + 1),
                Yaml::Seq(s) if !s.is_empty() => {
                    doc.push_str(&marker);
                    doc.push('\n');
                    s.dump(doc, &pad(level + 1), level + 1);
                }
                v => {
                    doc.push_str(&marker);
                    doc.push(' ');
                    doc.push_str(&scalar(v));
                    doc.push('\n');
                }
            }
        }
    }
}

/// Dump the YAML data in to block format.
///
/// ```
/// use weak_yaml::{dump, yaml_map, yaml_seq};
/// let doc = dump(&yaml_map! {
///     "name" => "ProjectAlpha",
///     "host" => "localhost:8080",
///     "list" => yaml_seq!["apple", "100", yaml_map! { "id" => 1, "task" => "Buy" }],
/// });
/// assert_eq!(
///     doc,
///     "name: ProjectAlpha\nhost: \"localhost:8080\"\nlist:\n  - apple\n  - \"100\"\n  - id: 1\n    task: Buy\n"
/// );
/// ```
pub fn dump(yaml: &Yaml) -> String {
    let mut doc = String::new();
    match yaml {
        Yaml::Map(m) => m.dump(&mut doc, "", 0),
        Yaml::Seq(s) if !s.is_empty() => s.dump(&mut doc, "", 0),
        v => {
            doc.push_str(&scalar(v));
            doc.push('\n');
        }
    }
    doc
}
