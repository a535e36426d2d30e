use ritelinked::LinkedHashMap;

macro_rules! impl_from {
    ($(impl $($from_ty:ty),+ => $ty:ident($conv:ident))+) => {
        $($(impl From<$from_ty> for Yaml {
            fn from(v: $from_ty) -> Self {
                Self::$ty(impl_from!(@$conv v))
            }
        })+)+
    };
    (@string $v:ident) => { $v.to_string() };
    (@number $v:ident) => { $v as f64 };
}

macro_rules! as_method {
    {$(#[$meta:meta])* fn $id:ident = $ty:ident$(($op:tt))? $(| $null:ident($default:expr))? -> $r:ty} => {
        $(#[$meta])*
        pub fn $id(&self) -> Option<$r> {
            match self {
                Self::$ty(v) => Some($($op)?v),
                $(Self::$null => Some($default),)?
                _ => None,
            }
        }
    };
}

/// The sequence data structure of YAML.
pub type Seq = Vec<Yaml>;
/// The map data structure of YAML, ordered by insertion.
pub type Map = LinkedHashMap<String, Yaml>;

/// YAML data types.
///
/// The tree owns all of its data, so a [`Clone`] is always a deep and independent copy.
///
/// This type can convert from primitive types by `From` and `Into` traits.
///
/// ```
/// use weak_yaml::Yaml;
///
/// assert_eq!(Yaml::Number(20.), 20.into());
/// assert_eq!(Yaml::Str("a".into()), "a".into());
/// ```
///
/// Also, the iterators can turn into sequences and maps.
///
/// ```
/// use weak_yaml::{yaml_map, yaml_seq, Yaml};
///
/// let v = vec![Yaml::from(1), Yaml::from(2), Yaml::from(3)];
/// assert_eq!(v.into_iter().collect::<Yaml>(), yaml_seq![1, 2, 3]);
/// let m = vec![("a".to_string(), Yaml::from(2))];
/// assert_eq!(m.into_iter().collect::<Yaml>(), yaml_map! { "a" => 2 });
/// ```
#[derive(PartialEq, Debug, Clone)]
pub enum Yaml {
    /// Null
    Null,
    /// Boolean
    Bool(bool),
    /// Number
    Number(f64),
    /// String
    Str(String),
    /// Sequence
    Seq(Seq),
    /// Map
    Map(Map),
}

impl Yaml {
    /// Check the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Seq(_) => "sequence",
            Self::Map(_) => "map",
        }
    }

    as_method! {
        /// Convert to boolean.
        ///
        /// ```
        /// use weak_yaml::Yaml;
        /// assert_eq!(Some(true), Yaml::Bool(true).as_bool());
        /// ```
        fn as_bool = Bool(*) -> bool
    }

    as_method! {
        /// Convert to number.
        ///
        /// ```
        /// use weak_yaml::Yaml;
        /// assert_eq!(Some(20.06), Yaml::from(20.06).as_number());
        /// ```
        fn as_number = Number(*) -> f64
    }

    as_method! {
        /// Convert to string slice.
        ///
        /// This method allows null, it represented as empty string.
        ///
        /// ```
        /// use weak_yaml::Yaml;
        /// assert_eq!(Some("abc"), Yaml::from("abc").as_str());
        /// assert_eq!(Some(""), Yaml::Null.as_str());
        /// ```
        fn as_str = Str | Null("") -> &str
    }

    as_method! {
        /// Convert to sequence.
        fn as_seq = Seq -> &Seq
    }

    as_method! {
        /// Convert to map.
        fn as_map = Map -> &Map
    }

    /// Get a value of the map by key.
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_map()?.get(key)
    }

    /// Get a mutable value of the map by key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Self> {
        match self {
            Self::Map(m) => m.get_mut(key),
            _ => None,
        }
    }

    /// Convert to map and try to get the value by keys recursively.
    ///
    /// ```
    /// use weak_yaml::{yaml_map, Yaml};
    /// let n = yaml_map! { "a" => yaml_map! { "b" => 30. } };
    /// assert_eq!(Some(&Yaml::from(30.)), n.get_path(&["a", "b"]));
    /// assert_eq!(None, n.get_path(&["a", "c"]));
    /// ```
    pub fn get_path(&self, keys: &[&str]) -> Option<&Self> {
        keys.iter().try_fold(self, |n, k| n.get(k))
    }

    /// Bind `key` in a map, replacing an existing value at its original position.
    ///
    /// Returns `false` if this value is not a map.
    pub fn bind(&mut self, key: String, value: Self) -> bool {
        match self {
            Self::Map(m) => {
                map_bind(m, key, value);
                true
            }
            _ => false,
        }
    }

    /// Append an item to a sequence.
    ///
    /// Returns `false` if this value is not a sequence.
    pub fn push(&mut self, value: Self) -> bool {
        match self {
            Self::Seq(s) => {
                s.push(value);
                true
            }
            _ => false,
        }
    }
}

/// Insert into the map without moving an existing key to the back.
pub(crate) fn map_bind(m: &mut Map, key: String, value: Yaml) {
    match m.get_mut(&key) {
        Some(slot) => *slot = value,
        None => {
            m.insert(key, value);
        }
    }
}

impl Default for Yaml {
    fn default() -> Self {
        Self::Null
    }
}

impl From<()> for Yaml {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Yaml {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl_from! {
    impl char, &str, String, &String => Str(string)
    impl u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64 => Number(number)
}

impl From<Seq> for Yaml {
    fn from(s: Seq) -> Self {
        Self::Seq(s)
    }
}

impl From<Map> for Yaml {
    fn from(m: Map) -> Self {
        Self::Map(m)
    }
}

impl<Y: Into<Yaml>> From<Option<Y>> for Yaml {
    fn from(v: Option<Y>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl FromIterator<Yaml> for Yaml {
    fn from_iter<T: IntoIterator<Item = Yaml>>(iter: T) -> Self {
        Self::Seq(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Yaml)> for Yaml {
    fn from_iter<T: IntoIterator<Item = (String, Yaml)>>(iter: T) -> Self {
        let mut m = Map::new();
        for (k, v) in iter {
            map_bind(&mut m, k, v);
        }
        Self::Map(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{yaml_map, yaml_seq};

    #[test]
    fn rebinding_keeps_position() {
        let mut m = yaml_map! { "a" => 1, "b" => 2 };
        assert!(m.bind("a".into(), 3.into()));
        let keys = m.as_map().unwrap().keys().cloned().collect::<Vec<_>>();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(m.get("a"), Some(&Yaml::Number(3.)));
    }

    #[test]
    fn push_rejects_map() {
        let mut m = yaml_map! { "a" => 1 };
        assert!(!m.push(Yaml::Null));
        let mut s = yaml_seq![];
        assert!(s.push(Yaml::Null));
        assert_eq!(s, yaml_seq![()]);
    }

    #[test]
    fn clone_is_independent() {
        let a = yaml_map! { "db" => yaml_map! { "port" => 3306 } };
        let mut b = a.clone();
        b.get_mut("db").unwrap().bind("port".into(), 1.into());
        assert_eq!(a.get_path(&["db", "port"]), Some(&Yaml::Number(3306.)));
        assert_eq!(b.get_path(&["db", "port"]), Some(&Yaml::Number(1.)));
    }
}
