//! Owned string collection with bulk transformations
//!
//! [`StringArray`] wraps a `Vec<String>` and offers each bulk operation as
//! an explicit pair: an in-place method (`uppercase_all`) and a copying one
//! (`to_uppercased`). The original API multiplexed both behind a boolean
//! flag; named pairs read better and let the borrow checker document which
//! one you meant.

use crate::string::{normalize_array, sort_alphabetically, ArrayNormalization};

/// An owned, growable collection of strings with bulk helpers.
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::StringArray;
///
/// let mut arr = StringArray::from_slice(&["a", "b"]);
/// let upper = arr.to_uppercased();
/// assert_eq!(upper.items(), ["A", "B"]);
/// assert_eq!(arr.items(), ["a", "b"]);
///
/// arr.uppercase_all();
/// assert_eq!(arr.items(), ["A", "B"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringArray {
    items: Vec<String>,
}

impl StringArray {
    /// Creates an empty collection.
    pub fn new() -> Self {
        StringArray { items: Vec::new() }
    }

    /// Creates a collection from a slice of string slices.
    pub fn from_slice(items: &[&str]) -> Self {
        StringArray {
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Appends one string.
    pub fn push<S: Into<String>>(&mut self, item: S) {
        self.items.push(item.into());
    }

    /// Appends every string of an iterator.
    pub fn extend<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.extend(items.into_iter().map(Into::into));
    }

    /// The current items, in order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the collection, returning the inner vector.
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }

    /// Uppercases every item in place.
    pub fn uppercase_all(&mut self) {
        for item in &mut self.items {
            *item = item.to_uppercase();
        }
    }

    /// Returns a copy with every item uppercased.
    pub fn to_uppercased(&self) -> Self {
        let mut copy = self.clone();
        copy.uppercase_all();
        copy
    }

    /// Lowercases every item in place.
    pub fn lowercase_all(&mut self) {
        for item in &mut self.items {
            *item = item.to_lowercase();
        }
    }

    /// Returns a copy with every item lowercased.
    pub fn to_lowercased(&self) -> Self {
        let mut copy = self.clone();
        copy.lowercase_all();
        copy
    }

    /// Sorts the items alphabetically (by normalized key) in place.
    pub fn sort_in_place(&mut self) {
        let borrowed: Vec<&str> = self.items.iter().map(String::as_str).collect();
        self.items = sort_alphabetically(&borrowed);
    }

    /// Returns a copy sorted alphabetically (by normalized key).
    pub fn sorted(&self) -> Self {
        let mut copy = self.clone();
        copy.sort_in_place();
        copy
    }

    /// Normalizes every item in place, dropping the ones that come out
    /// empty.
    pub fn normalize_all(&mut self, mode: ArrayNormalization) {
        let borrowed: Vec<&str> = self.items.iter().map(String::as_str).collect();
        self.items = normalize_array(&borrowed, mode);
    }

    /// Returns a normalized copy, invalid items dropped.
    pub fn normalized(&self, mode: ArrayNormalization) -> Self {
        let mut copy = self.clone();
        copy.normalize_all(mode);
        copy
    }
}

impl From<Vec<String>> for StringArray {
    fn from(items: Vec<String>) -> Self {
        StringArray { items }
    }
}

impl FromIterator<String> for StringArray {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        StringArray {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for StringArray {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_case_pairs() {
        let mut arr = StringArray::from_slice(&["a", "b"]);
        assert_eq!(arr.items(), ["a", "b"]);

        let upper = arr.to_uppercased();
        assert_eq!(upper.items(), ["A", "B"]);
        assert_eq!(arr.items(), ["a", "b"]);

        arr.uppercase_all();
        assert_eq!(arr.items(), ["A", "B"]);

        arr.lowercase_all();
        assert_eq!(arr.items(), ["a", "b"]);
        assert_eq!(arr.to_lowercased().items(), ["a", "b"]);
    }

    #[test]
    fn test_push_and_extend() {
        let mut arr = StringArray::new();
        assert!(arr.is_empty());
        arr.push("a");
        arr.extend(["b", "c"]);
        assert_eq!(arr.items(), ["a", "b", "c"]);
        assert_eq!(arr.len(), 3);
    }

    #[test]
    fn test_sort_pairs() {
        let arr = StringArray::from_slice(&["delta", "Alpha", "bravo"]);
        assert_eq!(arr.sorted().items(), ["Alpha", "bravo", "delta"]);

        let mut arr = arr;
        arr.sort_in_place();
        assert_eq!(arr.items(), ["Alpha", "bravo", "delta"]);
    }

    #[test]
    fn test_normalize_pairs() {
        let arr = StringArray::from_slice(&["  hÉlLo ", "", " WörLD "]);
        assert_eq!(
            arr.normalized(ArrayNormalization::Standard).items(),
            ["hello", "world"]
        );
        assert_eq!(
            arr.normalized(ArrayNormalization::Soft).items(),
            ["hÉlLo", "WörLD"]
        );
        // the original is untouched by the copying variants
        assert_eq!(arr.items(), ["  hÉlLo ", "", " WörLD "]);

        let mut arr = arr;
        arr.normalize_all(ArrayNormalization::Softer);
        assert_eq!(arr.items(), ["héllo", "wörld"]);
    }

    #[test]
    fn test_conversions() {
        let arr: StringArray = vec!["a".to_string(), "b".to_string()].into();
        let collected: Vec<String> = arr.clone().into_iter().collect();
        assert_eq!(collected, ["a", "b"]);
        assert_eq!(arr.into_vec(), ["a", "b"]);
    }
}
