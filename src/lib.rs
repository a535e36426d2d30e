//! A minimal YAML subset reader and writer driven by indentation.
//!
//! The decoder decides the nesting from the leading spaces of each line,
//! types the scalars, and resolves anchors and aliases by copying.
//! The dumper writes the data back in block format.
//!
//! ```
//! use weak_yaml::{dump, parse, yaml_map};
//!
//! let doc = "
//! # Configuration for a service
//! service:
//!   name: api-gateway
//!   port: 8080
//!   version: 1.2.3
//! ";
//! let n = parse(doc).unwrap();
//! assert_eq!(
//!     n,
//!     yaml_map! {
//!         "service" => yaml_map! {
//!             "name" => "api-gateway",
//!             "port" => 8080,
//!             "version" => "1.2.3",
//!         },
//!     }
//! );
//! assert_eq!(
//!     dump(&n),
//!     "service:\n  name: api-gateway\n  port: 8080\n  version: 1.2.3\n"
//! );
//! ```
//!
//! The subset is not a full YAML 1.2 implementation:
//! there are no tags, no multi-document streams, and comments are discarded.
#![cfg_attr(doc_cfg, feature(doc_cfg))]
pub use crate::dumper::dump;
pub use crate::indicator::*;
pub use crate::parser::{parse, DecodeError};
pub use crate::yaml::*;

/// Create [`Yaml::Seq`] items literally.
///
/// The items will be transformed to [`Yaml`] by [`From`].
///
/// ```
/// use weak_yaml::{yaml_seq, Yaml};
/// let s = yaml_seq!["a", 1, true, ()];
/// assert_eq!(s.as_seq().unwrap()[3], Yaml::Null);
/// ```
#[macro_export]
macro_rules! yaml_seq {
    () => {
        $crate::Yaml::Seq(::std::vec::Vec::new())
    };
    ($($v:expr),+ $(,)?) => {
        $crate::Yaml::Seq(::std::vec![$($crate::Yaml::from($v)),+])
    };
}

/// Create [`Yaml::Map`] items literally.
///
/// ```
/// use weak_yaml::yaml_map;
/// let m = yaml_map! {
///     "a" => "b",
///     "c" => 1,
/// };
/// assert_eq!(m.get("c").and_then(|n| n.as_number()), Some(1.));
/// ```
#[macro_export]
macro_rules! yaml_map {
    () => {
        $crate::Yaml::Map($crate::Map::new())
    };
    ($($k:expr => $v:expr),+ $(,)?) => {{
        let mut m = $crate::Map::new();
        $(m.insert(::std::string::String::from($k), $crate::Yaml::from($v));)+
        $crate::Yaml::Map(m)
    }};
}

pub mod anchors;
pub mod dumper;
mod indicator;
mod json;
pub mod parser;
#[cfg(feature = "serde")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "serde")))]
pub mod serde;
#[cfg(test)]
mod tests;
mod yaml;
