use std::collections::HashMap;

use serde::Deserialize;

use crate::HeaderMapping;

/// Canonical field key → display label used in validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LabelMap {
    labels: HashMap<String, String>,
}

impl LabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels taken from the raw headers of a mapping, so messages name the
    /// columns the way the spreadsheet does.
    ///
    /// When several headers map to the same key the lexically smallest header
    /// wins, keeping the result independent of hash order.
    pub fn from_header_mapping(mapping: &HeaderMapping) -> Self {
        let mut labels: HashMap<String, String> = HashMap::new();
        for (header, key) in mapping.entries() {
            if key.is_empty() {
                continue;
            }
            labels
                .entry(key.to_string())
                .or_insert_with(|| header.to_string());
        }
        Self { labels }
    }

    /// Display label for `key`; the key itself when no label is known.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Adds every label of `other`, replacing existing ones.
    pub fn merge(&mut self, other: LabelMap) {
        self.labels.extend(other.labels);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LabelMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            labels: iter
                .into_iter()
                .map(|(key, label)| (key.into(), label.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_is_its_own_label() {
        let labels: LabelMap = [("serial_number", "通番")].into_iter().collect();
        assert_eq!(labels.label("serial_number"), "通番");
        assert_eq!(labels.label("customer_name"), "customer_name");
    }

    #[test]
    fn labels_follow_header_mapping() {
        let labels = LabelMap::from_header_mapping(&HeaderMapping::default());
        assert_eq!(labels.label("serial_number"), "#通番");
        assert_eq!(labels.label("transfer_execution_date"), "譲渡実行日");
    }
}
