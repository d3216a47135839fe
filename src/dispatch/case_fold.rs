//! Case-insensitive JSON decoding.
//!
//! The service is not strict about the casing of property names, so struct
//! fields and unit enum variants are matched ignoring ASCII case. Exact
//! matches always win; a key that matches nothing is passed through untouched
//! so `#[serde(default)]` and unknown-field handling behave as usual.

use std::collections::HashSet;

use serde::de::value::{MapDeserializer, SeqDeserializer};
use serde::de::{DeserializeOwned, Deserializer, IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;
use serde_json::{Error, Map, Value};

/// A [`Value`] whose struct keys and enum variants are folded onto the names
/// the target type declares.
pub struct CaseInsensitive(pub Value);

/// Deserialize `T` from `value`, matching names ignoring ASCII case.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    T::deserialize(CaseInsensitive(value))
}

/// Parse `bytes` as JSON and deserialize `T`, matching names ignoring ASCII case.
pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
    from_value(serde_json::from_slice(bytes)?)
}

fn canonical(name: String, known: &'static [&'static str]) -> String {
    if known.contains(&name.as_str()) {
        return name;
    }
    known
        .iter()
        .find(|candidate| candidate.eq_ignore_ascii_case(&name))
        .map_or(name, |candidate| (*candidate).to_string())
}

/// Fold `map`'s keys onto `fields`. A folded key is dropped when its field is
/// already taken by an exact key or an earlier folded one.
fn fold_keys(map: Map<String, Value>, fields: &'static [&'static str]) -> Vec<(String, Value)> {
    let mut taken: HashSet<String> = map
        .keys()
        .filter(|key| fields.contains(&key.as_str()))
        .cloned()
        .collect();

    map.into_iter()
        .filter_map(|(key, value)| {
            if fields.contains(&key.as_str()) {
                return Some((key, value));
            }
            let name = canonical(key, fields);
            if fields.contains(&name.as_str()) && !taken.insert(name.clone()) {
                return None;
            }
            Some((name, value))
        })
        .collect()
}

fn visit_array<'de, V: Visitor<'de>>(items: Vec<Value>, visitor: V) -> Result<V::Value, Error> {
    let mut seq: SeqDeserializer<_, Error> =
        SeqDeserializer::new(items.into_iter().map(CaseInsensitive));
    let value = visitor.visit_seq(&mut seq)?;
    seq.end()?;
    Ok(value)
}

fn visit_object<'de, V: Visitor<'de>>(
    entries: Vec<(String, Value)>,
    visitor: V,
) -> Result<V::Value, Error> {
    let mut map: MapDeserializer<'de, _, Error> = MapDeserializer::new(
        entries
            .into_iter()
            .map(|(key, value)| (key, CaseInsensitive(value))),
    );
    let value = visitor.visit_map(&mut map)?;
    map.end()?;
    Ok(value)
}

impl<'de> IntoDeserializer<'de, Error> for CaseInsensitive {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self {
        self
    }
}

impl<'de> Deserializer<'de> for CaseInsensitive {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        match self.0 {
            Value::Array(items) => visit_array(items, visitor),
            Value::Object(map) => visit_object(map.into_iter().collect(), visitor),
            other => other.deserialize_any(visitor),
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        match self.0 {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Error> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error> {
        match self.0 {
            Value::Object(map) => visit_object(fold_keys(map, fields), visitor),
            other => CaseInsensitive(other).deserialize_any(visitor),
        }
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error> {
        match self.0 {
            Value::String(variant) => {
                Value::String(canonical(variant, variants)).deserialize_enum(name, variants, visitor)
            }
            other => other.deserialize_enum(name, variants, visitor),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map identifier ignored_any
    }
}
