use super::DecodeError;
use crate::{Map, Yaml};
use serde_json::Value as Json;
use std::mem::discriminant;

/// Coerce a trimmed token into a scalar or an inline collection.
///
/// The checks are ordered, first match wins:
/// inline collection, boolean, null, number, quoted string and plain string.
///
/// ```
/// use weak_yaml::{parser::parse_primitive, yaml_seq, Yaml};
/// assert_eq!(Ok(Yaml::Bool(false)), parse_primitive("FALSE"));
/// assert_eq!(Ok(Yaml::Null), parse_primitive("~"));
/// assert_eq!(Ok(Yaml::Number(3306.)), parse_primitive("3306"));
/// assert_eq!(Ok(Yaml::from("1.2.3")), parse_primitive("1.2.3"));
/// assert_eq!(Ok(Yaml::from("My App")), parse_primitive("\"My App\""));
/// assert_eq!(Ok(yaml_seq!["a", "b"]), parse_primitive("[a, b]"));
/// assert!(parse_primitive("[1, 2, \"invalid json\"]").is_err());
/// ```
pub fn parse_primitive(token: &str) -> Result<Yaml, DecodeError> {
    let token = token.trim();
    if let Some(inner) = wrapped(token, '[', ']') {
        return inline_seq(token, inner);
    }
    if let Some(inner) = wrapped(token, '{', '}') {
        return inline_map(token, inner);
    }
    let yaml = if token.eq_ignore_ascii_case("true") {
        Yaml::Bool(true)
    } else if token.eq_ignore_ascii_case("false") {
        Yaml::Bool(false)
    } else if token.eq_ignore_ascii_case("null") || token == "~" {
        Yaml::Null
    } else if let Some(n) = number(token) {
        Yaml::Number(n)
    } else if let Some(s) = unquote(token) {
        Yaml::Str(s.to_string())
    } else {
        Yaml::Str(token.to_string())
    };
    Ok(yaml)
}

/// Match a numeric literal: signs, digits, dots and exponents only.
///
/// Version strings such as `1.2.3` are not numbers,
/// and neither are the literals out of the finite `f64` range.
pub(crate) fn number(token: &str) -> Option<f64> {
    let numeric = token.bytes().any(|b| b.is_ascii_digit())
        && token
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if numeric {
        token.parse().ok().filter(|n: &f64| n.is_finite())
    } else {
        None
    }
}

/// Strip a matching pair of double or single quotes. No escaping.
pub(crate) fn unquote(token: &str) -> Option<&str> {
    ['"', '\'']
        .into_iter()
        .find_map(|q| token.strip_prefix(q)?.strip_suffix(q))
}

fn wrapped(token: &str, open: char, close: char) -> Option<&str> {
    token.strip_prefix(open)?.strip_suffix(close)
}

fn malformed(token: &str) -> DecodeError {
    DecodeError::MalformedInlineCollection {
        token: token.to_string(),
        line: 0,
    }
}

/// Bracket notation, single quotes are accepted as double quotes.
fn strict(token: &str) -> Option<Json> {
    serde_json::from_str(&token.replace('\'', "\"")).ok()
}

/// Strict arrays must hold one kind of element at each level.
fn homogeneous(items: &[Json]) -> bool {
    let Some((first, rest)) = items.split_first() else {
        return true;
    };
    rest.iter().all(|v| discriminant(v) == discriminant(first))
        && items.iter().all(|v| match v {
            Json::Array(a) => homogeneous(a),
            _ => true,
        })
}

fn inline_seq(token: &str, inner: &str) -> Result<Yaml, DecodeError> {
    if let Some(Json::Array(a)) = strict(token) {
        if homogeneous(&a) {
            return Ok(Json::Array(a).into());
        }
    }
    // Naive fallback, commas inside nested brackets are not respected
    inner
        .split(',')
        .map(|piece| {
            let piece = piece.trim();
            if piece.is_empty() || piece.starts_with(|c: char| c == '"' || c == '\'') {
                Err(malformed(token))
            } else {
                parse_primitive(piece)
            }
        })
        .collect()
}

fn inline_map(token: &str, inner: &str) -> Result<Yaml, DecodeError> {
    if let Some(m @ Json::Object(_)) = strict(token) {
        return Ok(m.into());
    }
    if inner.trim().is_empty() {
        return Ok(Yaml::Map(Map::new()));
    }
    inner
        .split(',')
        .map(|piece| {
            let (k, v) = piece.split_once(':').ok_or_else(|| malformed(token))?;
            let k = k.trim();
            if k.is_empty() {
                return Err(malformed(token));
            }
            Ok((unquote(k).unwrap_or(k).to_string(), parse_primitive(v)?))
        })
        .collect()
}
