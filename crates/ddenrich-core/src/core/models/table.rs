use super::combination::Combination;
use std::collections::HashMap;

/// An insertion-ordered map keyed by [`Combination`].
///
/// Iteration order is the order in which keys were first inserted. Canonical orientation of a
/// pair and the row order of exported results both depend on that order, so it must be
/// stable across runs on the same input.
#[derive(Debug, Clone)]
pub struct CombinationMap<V> {
    entries: Vec<(Combination, V)>,
    index: HashMap<Combination, usize>,
}

impl<V> Default for CombinationMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> CombinationMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &Combination) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &Combination) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, key: &Combination) -> Option<&mut V> {
        match self.index.get(key) {
            Some(&i) => Some(&mut self.entries[i].1),
            None => None,
        }
    }

    /// Inserts or replaces a value. A replaced key keeps its original position.
    pub fn insert(&mut self, key: Combination, value: V) -> Option<V> {
        if let Some(&i) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[i].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    pub fn get_or_insert_with(&mut self, key: &Combination, default: impl FnOnce() -> V) -> &mut V {
        let i = match self.index.get(key) {
            Some(&i) => i,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key.clone(), default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[i].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Combination, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Combination> {
        self.entries.iter().map(|(k, _)| k)
    }
}

impl<V: PartialEq> PartialEq for CombinationMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V> FromIterator<(Combination, V)> for CombinationMap<V> {
    fn from_iter<I: IntoIterator<Item = (Combination, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V> IntoIterator for CombinationMap<V> {
    type Item = (Combination, V);
    type IntoIter = std::vec::IntoIter<(Combination, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
