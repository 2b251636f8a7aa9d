//! Random selection over collections
//!
//! The original API multiplexed arrays and objects through one runtime
//! type test; here the collection shape picks the function instead:
//! [`pick`] for slices, [`pick_value`] / [`pick_key`] for maps. Empty
//! input yields `None` (the "neither an array nor an object" throw was a
//! type check the compiler now does).

use std::collections::HashMap;

use rand::seq::SliceRandom;

/// Picks a random element of a slice, `None` when empty.
///
/// # Example
///
/// ```rust
/// use zaka_utils::entity::pick;
///
/// let options = ["A", "B", "C", "D", "E"];
/// let picked = pick(&options).copied();
/// assert!(picked.is_some_and(|p| options.contains(&p)));
/// assert_eq!(pick::<&str>(&[]), None);
/// ```
pub fn pick<T>(items: &[T]) -> Option<&T> {
    items.choose(&mut rand::thread_rng())
}

/// Picks a random value of a map, `None` when empty.
pub fn pick_value<K, V>(map: &HashMap<K, V>) -> Option<&V> {
    let values: Vec<&V> = map.values().collect();
    values.choose(&mut rand::thread_rng()).copied()
}

/// Picks a random key of a map, `None` when empty.
pub fn pick_key<K, V>(map: &HashMap<K, V>) -> Option<&K> {
    let keys: Vec<&K> = map.keys().collect();
    keys.choose(&mut rand::thread_rng()).copied()
}

/// Returns a shuffled copy of a slice.
pub fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    let mut copy = items.to_vec();
    copy.shuffle(&mut rand::thread_rng());
    copy
}
