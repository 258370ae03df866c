//! Rebuild a sequence from a keyed map and an explicit key order

use std::collections::HashMap;
use std::hash::Hash;

/// Look up each key in turn, keeping one slot per key
///
/// Never relies on the map's iteration order. Keys absent from the map
/// produce `None` so the output stays aligned with `keys`.
pub fn order_by_keys<K, V>(map: &HashMap<K, V>, keys: &[K]) -> Vec<Option<V>>
where
    K: Eq + Hash,
    V: Clone,
{
    keys.iter().map(|key| map.get(key).cloned()).collect()
}
