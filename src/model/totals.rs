use std::collections::HashMap;

/// Insertion-ordered key -> total mapping.
///
/// Adding to an existing key accumulates into the same bucket, which is how
/// duplicate tissue column names end up merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    keys: Vec<String>,
    values: Vec<f64>,
    index: HashMap<String, usize>,
}

impl Totals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub fn add(&mut self, key: &str, value: f64) {
        match self.index.get(key) {
            Some(&idx) => self.values[idx] += value,
            None => {
                self.index.insert(key.to_string(), self.keys.len());
                self.keys.push(key.to_string());
                self.values.push(value);
            }
        }
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.index.get(key).map(|&idx| self.values[idx])
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.keys
            .iter()
            .zip(self.values.iter())
            .map(|(k, &v)| (k.as_str(), v))
    }
}

impl<K: AsRef<str>> FromIterator<(K, f64)> for Totals {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut out = Totals::new();
        for (key, value) in iter {
            out.add(key.as_ref(), value);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/totals.rs"]
mod tests;
