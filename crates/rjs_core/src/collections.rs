//! Collection types used throughout the front end.

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;

/// An insertion-ordered map using FxHash.
///
/// Scope frames and harvested declarations use this so that iteration order
/// follows declaration order, which keeps builds deterministic.
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// An insertion-ordered set using FxHash.
pub type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_map_preserves_order() {
        let mut map = FxIndexMap::default();
        map.insert("c", 3);
        map.insert("a", 1);
        map.insert("b", 2);

        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_index_set_keeps_first_insertion() {
        let mut set = FxIndexSet::default();
        assert!(set.insert("x"));
        assert!(set.insert("y"));
        assert!(!set.insert("x"));
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec!["x", "y"]);
    }
}
