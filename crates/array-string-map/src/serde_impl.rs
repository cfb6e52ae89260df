//! Serde support: a map serializes as a sequence of `[key, value]` pairs in
//! insertion order. Deserialization uses the default separator.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::config::MapConfig;
use crate::key::KeySequence;
use crate::map::ArrayStringMap;

/// Upper bound on entries reserved from an untrusted size hint.
const MAX_PREALLOCATED_ENTRIES: usize = 4096;

impl<K: Serialize, V: Serialize> Serialize for ArrayStringMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for entry in self.entries() {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }
}

impl<'de, K, V> Deserialize<'de> for ArrayStringMap<K, V>
where
    K: Deserialize<'de> + KeySequence,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(EntriesVisitor(PhantomData))
    }
}

struct EntriesVisitor<K, V>(PhantomData<fn() -> (K, V)>);

impl<'de, K, V> Visitor<'de> for EntriesVisitor<K, V>
where
    K: Deserialize<'de> + KeySequence,
    V: Deserialize<'de>,
{
    type Value = ArrayStringMap<K, V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of [key, value] pairs")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATED_ENTRIES);
        let mut map = ArrayStringMap::with_config(MapConfig::new().with_capacity(capacity));
        let mut position = 0usize;
        while let Some((key, value)) = seq.next_element::<(K, V)>()? {
            let encoded = map.encode_key(&key);
            if map.insert(key, value).is_some() {
                tracing::warn!(
                    position,
                    key = ?encoded,
                    "duplicate key in serialized map, keeping the later entry"
                );
            }
            position += 1;
        }
        Ok(map)
    }
}
