//! The implementation of serialization. The technique is come from [`serde`](::serde).
//!
//! Here is an example for converting YAML documents into a custom structure.
//!
//! ```
//! use serde::Deserialize;
//! use weak_yaml::serde::from_str;
//!
//! #[derive(Deserialize)]
//! struct Member {
//!     name: String,
//!     married: bool,
//!     age: u8,
//! }
//!
//! let doc = "
//! name: Bob
//! married: true
//! age: 46
//! ";
//! let officer = from_str::<Member>(doc).unwrap();
//! assert_eq!("Bob", officer.name);
//! assert!(officer.married);
//! assert_eq!(46, officer.age);
//! ```
//!
//! The data goes through the same decoder and dumper,
//! so the anchors are resolved before the structure sees them.
//! [`Yaml`] itself implements [`Serialize`] and [`Deserialize`](::serde::Deserialize).
//!
//! # Error
//!
//! Please see [`SerdeError`] for more information.
//!
//! ```
//! use serde::Deserialize;
//! use weak_yaml::serde::{from_str, SerdeError};
//!
//! #[derive(Deserialize, Debug)]
//! struct Member {
//!     name: String,
//! }
//!
//! let err = from_str::<Member>("name: *nobody").unwrap_err();
//! assert!(matches!(err, SerdeError::Decode(_)));
//! ```
use crate::{dump, parse, DecodeError, Yaml};
use ::serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

mod de;
mod ser_node;

/// The errors of the serde bridge.
#[derive(Error, Debug)]
pub enum SerdeError {
    /// The document can not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The data does not fit the structure.
    #[error("invalid data: {0}")]
    Data(#[from] serde_json::Error),
}

/// Parse the document and deserialize it to a specific type.
pub fn from_str<D>(doc: &str) -> Result<D, SerdeError>
where
    D: DeserializeOwned,
{
    let yaml = parse(doc)?;
    Ok(serde_json::from_value(serde_json::to_value(&yaml)?)?)
}

/// Serialize data and dump it into a YAML document.
///
/// ```
/// use serde::Serialize;
/// use weak_yaml::serde::to_string;
///
/// #[derive(Serialize)]
/// struct Member<'a> {
///     name: &'a str,
///     married: bool,
///     age: u8,
/// }
///
/// let officer = Member { name: "Bob", married: true, age: 46 };
/// assert_eq!("name: Bob\nmarried: true\nage: 46\n", to_string(&officer).unwrap());
/// ```
pub fn to_string<S>(any: &S) -> Result<String, SerdeError>
where
    S: Serialize + ?Sized,
{
    Ok(dump(&Yaml::from(serde_json::to_value(any)?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{yaml_map, yaml_seq};
    use ::serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Database {
        host: String,
        port: u16,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Config {
        name: String,
        version: String,
        database: Database,
        replica: Database,
        features: Vec<String>,
        ratio: f64,
        comment: Option<String>,
    }

    const DOC: &str = "
name: My Application
version: 1.2.3
database: &db
  host: localhost
  port: 3306
replica: *db
features: [logging, monitoring, caching]
ratio: 0.5
comment: null
";

    #[test]
    fn typed_round_trip() {
        let config = from_str::<Config>(DOC).unwrap();
        let db = Database {
            host: "localhost".into(),
            port: 3306,
        };
        assert_eq!(config.database, db);
        assert_eq!(config.replica, db);
        assert_eq!(config.version, "1.2.3");
        assert_eq!(config.comment, None);
        let doc = to_string(&config).unwrap();
        assert_eq!(from_str::<Config>(&doc).unwrap(), config);
    }

    #[test]
    fn mismatched_type() {
        let err = from_str::<Database>("host: h\nport: high\n").unwrap_err();
        assert!(matches!(err, SerdeError::Data(_)));
    }

    #[test]
    fn yaml_through_serde() {
        let n = yaml_map! {
            "a" => yaml_seq![1, 1.5, "x", ()],
            "b" => yaml_map! { "c" => false },
        };
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json, serde_json::json!({"a": [1, 1.5, "x", null], "b": {"c": false}}));
        assert_eq!(serde_json::from_value::<Yaml>(json).unwrap(), n);
    }
}
