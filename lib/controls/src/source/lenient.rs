//! Deserializers for hand maintained sources, a bad field degrades to its default instead of
//! rejecting the whole document

use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer,
    de::{
        DeserializeOwned, Error, IgnoredAny, MapAccess, SeqAccess, Visitor,
        value::MapAccessDeserializer,
    },
};
use serde_json::Value;
use std::{fmt, marker::PhantomData};

/// A value that is only kept when the source has an object there
///
/// Works on the stream directly, so map entries keep their file order
#[derive(Debug)]
pub struct Lenient<T>(pub Option<T>);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Lenient<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LenientVisitor(PhantomData))
    }
}

struct LenientVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for LenientVisitor<T> {
    type Value = Lenient<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any value")
    }

    fn visit_bool<E: Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(Lenient(None))
    }

    fn visit_i64<E: Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(Lenient(None))
    }

    fn visit_u64<E: Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(Lenient(None))
    }

    fn visit_f64<E: Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(Lenient(None))
    }

    fn visit_str<E: Error>(self, _: &str) -> Result<Self::Value, E> {
        Ok(Lenient(None))
    }

    fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
        Ok(Lenient(None))
    }

    fn visit_none<E: Error>(self) -> Result<Self::Value, E> {
        Ok(Lenient(None))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        Lenient::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}

        Ok(Lenient(None))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        T::deserialize(MapAccessDeserializer::new(map)).map(|value| Lenient(Some(value)))
    }
}

/// The field, or its default when the source has null or the wrong type
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// The elements that parse, anything but a list is empty
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// The entries that are objects, in file order, anything but an object is empty
pub fn lenient_map<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let Lenient(entries) = Lenient::<IndexMap<String, Lenient<T>>>::deserialize(deserializer)?;

    Ok(entries
        .into_iter()
        .flatten()
        .filter_map(|(key, Lenient(value))| Some((key, value?)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Record {
        #[serde(default, deserialize_with = "lenient")]
        name: Option<String>,
        #[serde(default, deserialize_with = "lenient_list")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "lenient_map")]
        children: IndexMap<String, Record>,
    }

    #[test]
    fn bad_fields_take_defaults() {
        let record: Record =
            serde_json::from_str(r#"{ "name": 5, "tags": null, "children": [1, 2] }"#).unwrap();

        assert_eq!(record, Record::default());
    }

    #[test]
    fn bad_elements_are_dropped() {
        let record: Record = serde_json::from_str(
            r#"{
                "tags": ["a", null, 3, "b"],
                "children": { "z": {}, "bad": null, "a": { "name": "first" }, "num": 4 }
            }"#,
        )
        .unwrap();

        assert_eq!(record.tags, ["a", "b"]);
        assert_eq!(record.children.keys().collect::<Vec<_>>(), ["z", "a"]);
        assert_eq!(record.children["a"].name.as_deref(), Some("first"));
    }

    #[test]
    fn top_level_entries_skip_non_objects() {
        let entries: IndexMap<String, Lenient<Record>> =
            serde_json::from_str(r#"{ "b": { "name": "kept" }, "a": null, "c": "text" }"#).unwrap();

        let kept: Vec<_> = entries
            .into_iter()
            .filter_map(|(key, Lenient(value))| Some((key, value?)))
            .collect();

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].0, "b");
    }
}
