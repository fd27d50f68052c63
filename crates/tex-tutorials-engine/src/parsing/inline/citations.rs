use std::collections::HashMap;

use serde::Serialize;

/// Assigns sequential numbers to citation keys in first-seen order.
///
/// One registry belongs to one parse. Numbering starts at 1 and a key keeps
/// its number for the lifetime of the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitationRegistry {
    numbers: HashMap<String, usize>,
    order: Vec<String>,
}

impl CitationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number for `key`, assigning the next one if unseen.
    pub fn number_for(&mut self, key: &str) -> usize {
        if let Some(&n) = self.numbers.get(key) {
            return n;
        }
        let n = self.order.len() + 1;
        self.numbers.insert(key.to_string(), n);
        self.order.push(key.to_string());
        n
    }

    /// Looks up a key without assigning.
    pub fn get(&self, key: &str) -> Option<usize> {
        self.numbers.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Cited keys with their numbers, in numbering order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .enumerate()
            .map(|(i, key)| (key.as_str(), i + 1))
    }
}

/// Serialized as an ordered list of `{key, number}` pairs.
impl Serialize for CitationRegistry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry<'a> {
            key: &'a str,
            number: usize,
        }

        serializer.collect_seq(self.iter().map(|(key, number)| Entry { key, number }))
    }
}
