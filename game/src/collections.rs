use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;

/// Catalog entry addressable by its string key.
pub trait Keyed {
    fn key(&self) -> &str;
}

#[derive(Clone, Debug)]
pub struct Dictionary<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Dictionary<T> {
    fn default() -> Self {
        Self {
            items: vec![],
            index: HashMap::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum DictionaryError {
    KeyNotFound { key: String },
}

impl<T: Keyed> Dictionary<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Inserts or replaces an entry, keeping the original position on replace.
    pub fn insert(&mut self, kind: T) {
        let key = kind.key().to_string();
        match self.index.get(&key) {
            Some(position) => self.items[*position] = kind,
            None => {
                self.index.insert(key, self.items.len());
                self.items.push(kind);
            }
        }
    }

    pub fn get(&self, key: &str) -> Result<&T, DictionaryError> {
        self.index
            .get(key)
            .map(|position| &self.items[*position])
            .ok_or(DictionaryError::KeyNotFound {
                key: key.to_string(),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).cloned()
    }

    pub fn at(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Keyed> From<Vec<T>> for Dictionary<T> {
    fn from(items: Vec<T>) -> Self {
        let mut dictionary = Dictionary::default();
        for item in items {
            dictionary.insert(item);
        }
        dictionary
    }
}

impl<T: Serialize> Serialize for Dictionary<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T: Keyed + Deserialize<'de>> Deserialize<'de> for Dictionary<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(Dictionary::from(items))
    }
}

#[derive(Debug, Default, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    value: usize,
}

impl Sequence {
    pub fn one<C, T>(&mut self, constructor: C) -> T
    where
        C: Fn(usize) -> T,
    {
        self.value += 1;
        constructor(self.value)
    }

    pub fn register(&mut self, id: usize) {
        if id > self.value {
            self.value = id
        }
    }

    pub fn value(&self) -> usize {
        self.value
    }
}
