use crate::Yaml;
use serde_json::Value;

/// Numbers out of the `f64` range become null.
impl From<Value> for Yaml {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            Value::String(s) => Self::Str(s),
            Value::Array(a) => a.into_iter().map(Self::from).collect(),
            Value::Object(o) => o.into_iter().map(|(k, v)| (k, Self::from(v))).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{yaml_map, yaml_seq};

    #[test]
    fn from_json() {
        let v: Value = serde_json::from_str(r#"{"z": [1, "a", null], "b": {"c": true}}"#).unwrap();
        assert_eq!(
            Yaml::from(v),
            yaml_map! {
                "z" => yaml_seq![1, "a", ()],
                "b" => yaml_map! { "c" => true },
            }
        );
    }
}
