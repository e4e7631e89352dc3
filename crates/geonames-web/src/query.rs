//! Query string encoding for request structs.
//!
//! Request types declare which fields are sent, and under which key, with
//! [`query_fields!`](crate::query_fields). How a field is written depends on
//! its type through [`QueryValue`]: zero values are never sent, `bool` is only
//! sent when `true`, and a `Vec<String>` repeats its key once per element.
//! Composite fields marked `dive` write their own keys into the same query.

use std::collections::BTreeMap;

use geonames_types::{AdminCode, BoundingBox, Position};

/// Query parameters, one or more values per key, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: BTreeMap<String, Vec<String>>,
}

impl Query {
    /// Creates an empty query.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            params: BTreeMap::new(),
        }
    }

    /// Replaces every value of `key` with `value`.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.params.insert(key.to_string(), vec![value.into()]);
    }

    /// Adds `value` after any existing values of `key`.
    pub fn append(&mut self, key: &str, value: impl Into<String>) {
        self.params
            .entry(key.to_string())
            .or_default()
            .push(value.into());
    }

    /// Returns the values of `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> &[String] {
        self.params.get(key).map_or(&[], Vec::as_slice)
    }

    /// Returns true if no key is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Iterates over key/value pairs, keys in order, repeated keys adjacent.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.params.iter().flat_map(|(key, values)| {
            values.iter().map(move |value| (key.as_str(), value.as_str()))
        })
    }
}

impl std::fmt::Display for Query {
    /// Writes the pairs as `key=value&...` without percent-encoding.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (key, value)) in self.pairs().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

/// A field type that can be written under a single query key.
pub trait QueryValue {
    /// Writes `self` under `key`, or nothing if `self` is a zero value.
    fn encode_value(&self, key: &str, query: &mut Query);
}

impl QueryValue for String {
    fn encode_value(&self, key: &str, query: &mut Query) {
        if !self.is_empty() {
            query.set(key, self.as_str());
        }
    }
}

impl QueryValue for bool {
    fn encode_value(&self, key: &str, query: &mut Query) {
        if *self {
            query.set(key, "true");
        }
    }
}

macro_rules! impl_query_value_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl QueryValue for $ty {
                fn encode_value(&self, key: &str, query: &mut Query) {
                    if *self != 0 as $ty {
                        query.set(key, self.to_string());
                    }
                }
            }
        )*
    };
}

impl_query_value_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl QueryValue for Vec<String> {
    fn encode_value(&self, key: &str, query: &mut Query) {
        for value in self {
            query.append(key, value.as_str());
        }
    }
}

impl<T: QueryValue> QueryValue for Option<T> {
    fn encode_value(&self, key: &str, query: &mut Query) {
        if let Some(value) = self {
            value.encode_value(key, query);
        }
    }
}

/// A request that writes its fields into a query.
pub trait EncodeQuery {
    /// Writes every non-zero field into `query`.
    fn encode_into(&self, query: &mut Query);

    /// Encodes the request into a fresh query.
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        self.encode_into(&mut query);
        query
    }
}

/// Writes `lat` and `lng`.
impl EncodeQuery for Position {
    fn encode_into(&self, query: &mut Query) {
        self.latitude.encode_value("lat", query);
        self.longitude.encode_value("lng", query);
    }
}

/// Writes `east`, `west`, `north` and `south`.
impl EncodeQuery for BoundingBox {
    fn encode_into(&self, query: &mut Query) {
        self.east.encode_value("east", query);
        self.west.encode_value("west", query);
        self.north.encode_value("north", query);
        self.south.encode_value("south", query);
    }
}

/// Writes `adminCode1` through `adminCode5`.
impl EncodeQuery for AdminCode {
    fn encode_into(&self, query: &mut Query) {
        self.first.encode_value("adminCode1", query);
        self.second.encode_value("adminCode2", query);
        self.third.encode_value("adminCode3", query);
        self.fourth.encode_value("adminCode4", query);
        self.fifth.encode_value("adminCode5", query);
    }
}

/// Implements [`EncodeQuery`] for a request struct.
///
/// Each entry maps a field either to its query key or to `dive`, which
/// encodes a nested [`EncodeQuery`] value into the same query. Fields that
/// are not listed are never sent.
///
/// ```
/// use geonames_types::Position;
/// use geonames_web::{EncodeQuery, query_fields};
///
/// #[derive(Default)]
/// struct Lookup {
///     position: Position,
///     radius: f64,
///     verbose: bool,
///     lang: String,
/// }
///
/// query_fields!(Lookup {
///     position => dive,
///     radius => "radius",
///     verbose => "verbose",
///     lang => "lang",
/// });
///
/// let query = Lookup {
///     position: Position::new(47.5, 11.25),
///     lang: "de".into(),
///     ..Default::default()
/// }
/// .to_query();
/// assert_eq!(query.to_string(), "lang=de&lat=47.5&lng=11.25");
/// ```
#[macro_export]
macro_rules! query_fields {
    (@field $self:ident, $query:ident, $field:ident => dive) => {
        $crate::EncodeQuery::encode_into(&$self.$field, $query);
    };
    (@field $self:ident, $query:ident, $field:ident => $key:literal) => {
        $crate::QueryValue::encode_value(&$self.$field, $key, $query);
    };
    ($ty:ident { $($field:ident => $key:tt),* $(,)? }) => {
        impl $crate::EncodeQuery for $ty {
            fn encode_into(&self, query: &mut $crate::Query) {
                $( $crate::query_fields!(@field self, query, $field => $key); )*
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Sample {
        name: String,
        count: i32,
        limit: u64,
        ratio: f64,
        flag: bool,
        tags: Vec<String>,
        position: Position,
        admin: AdminCode,
    }

    crate::query_fields!(Sample {
        name => "name",
        count => "count",
        limit => "limit",
        ratio => "ratio",
        flag => "flag",
        tags => "tag",
        position => dive,
        admin => dive,
    });

    #[test]
    fn test_zero_values_are_omitted() {
        let query = Sample::default().to_query();
        assert!(query.is_empty());
    }

    #[test]
    fn test_every_kind_is_encoded() {
        let sample = Sample {
            name: "Wien".into(),
            count: -3,
            limit: 10,
            ratio: 0.25,
            flag: true,
            tags: vec!["a".into(), "b".into()],
            position: Position::new(1.111, -1.111),
            admin: AdminCode {
                first: "07".into(),
                third: "70101".into(),
                ..AdminCode::default()
            },
        };
        let query = sample.to_query();

        assert_eq!(query.get("name"), ["Wien"]);
        assert_eq!(query.get("count"), ["-3"]);
        assert_eq!(query.get("limit"), ["10"]);
        assert_eq!(query.get("ratio"), ["0.25"]);
        assert_eq!(query.get("flag"), ["true"]);
        assert_eq!(query.get("tag"), ["a", "b"]);
        assert_eq!(query.get("lat"), ["1.111"]);
        assert_eq!(query.get("lng"), ["-1.111"]);
        assert_eq!(query.get("adminCode1"), ["07"]);
        assert_eq!(query.get("adminCode3"), ["70101"]);
        assert!(query.get("adminCode2").is_empty());
    }

    #[test]
    fn test_false_is_omitted() {
        let sample = Sample {
            flag: false,
            name: "x".into(),
            ..Sample::default()
        };
        assert_eq!(sample.to_query().to_string(), "name=x");
    }

    #[test]
    fn test_floats_use_shortest_form() {
        let mut query = Query::new();
        10.0_f64.encode_value("radius", &mut query);
        0.1_f64.encode_value("step", &mut query);
        assert_eq!(query.to_string(), "radius=10&step=0.1");
    }

    #[test]
    fn test_set_overrides_and_append_repeats() {
        let mut query = Query::new();
        query.set("type", "xml");
        query.set("type", "json");
        query.append("country", "AT");
        query.append("country", "DE");
        assert_eq!(query.get("type"), ["json"]);
        assert_eq!(
            query.pairs().collect::<Vec<_>>(),
            vec![("country", "AT"), ("country", "DE"), ("type", "json")]
        );
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn test_bounding_box_dive() {
        let query = BoundingBox::new(11.5, 10.0, 47.75, 47.0).to_query();
        assert_eq!(query.to_string(), "east=11.5&north=47.75&south=47&west=10");
    }
}
