use crate::{yaml::map_bind, Map, Seq, Yaml};
use ::serde::{
    de::{Error, MapAccess, SeqAccess, Visitor},
    Deserialize, Deserializer,
};
use std::fmt::{Formatter, Result as FmtResult};

macro_rules! impl_visitor {
    (@) => { () };
    (@$ty:ty, $name:ident) => { $name };
    ($(fn $method:ident$(($ty:ty))?)+) => {
        $(fn $method<E>(self$(, v: $ty)?) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(Yaml::from(impl_visitor!(@$($ty, v)?)))
        })+
    };
}

struct YamlVisitor;

impl<'a> Visitor<'a> for YamlVisitor {
    type Value = Yaml;

    fn expecting(&self, f: &mut Formatter) -> FmtResult {
        f.write_str("a YAML value")
    }

    impl_visitor! {
        fn visit_bool(bool)
        fn visit_i64(i64)
        fn visit_u64(u64)
        fn visit_f64(f64)
        fn visit_str(&str)
        fn visit_string(String)
        fn visit_char(char)
        fn visit_unit
        fn visit_none
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'a>,
    {
        Yaml::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'a>,
    {
        let mut s = Seq::with_capacity(seq.size_hint().unwrap_or_default());
        while let Some(v) = seq.next_element()? {
            s.push(v);
        }
        Ok(Yaml::Seq(s))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'a>,
    {
        let mut m = Map::new();
        while let Some((k, v)) = map.next_entry::<String, Yaml>()? {
            map_bind(&mut m, k, v);
        }
        Ok(Yaml::Map(m))
    }
}

impl<'a> Deserialize<'a> for Yaml {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'a>,
    {
        deserializer.deserialize_any(YamlVisitor)
    }
}
