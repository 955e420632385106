use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::fields;

/// One data line of an import, keyed by canonical field key.
///
/// Values stay strings until validation interprets them. The duplicate flag
/// is carried between pipeline stages only and is never serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    #[serde(flatten)]
    values: BTreeMap<String, String>,
    #[serde(skip)]
    is_duplicate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    validation_result: Option<String>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Value for `key`, or the empty string when the column is absent.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Value for `key` when present and non-empty.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn serial_number(&self) -> Option<&str> {
        self.non_empty(fields::SERIAL_NUMBER)
    }

    pub fn is_duplicate(&self) -> bool {
        self.is_duplicate
    }

    pub fn mark_duplicate(&mut self) {
        self.is_duplicate = true;
    }

    pub fn clear_duplicate(&mut self) {
        self.is_duplicate = false;
    }

    pub fn validation_result(&self) -> Option<&str> {
        self.validation_result.as_deref()
    }

    pub fn set_validation_result(&mut self, result: impl Into<String>) {
        self.validation_result = Some(result.into());
    }

    /// True when the row has been validated and passed every check.
    pub fn is_ok(&self) -> bool {
        self.validation_result.as_deref() == Some(fields::VALIDATION_OK)
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_reads_as_empty() {
        let row: Row = [("status", "open")].into_iter().collect();
        assert_eq!(row.get("status"), "open");
        assert_eq!(row.get("customer_name"), "");
        assert_eq!(row.non_empty("customer_name"), None);
    }

    #[test]
    fn empty_serial_number_is_absent() {
        let row: Row = [("serial_number", "")].into_iter().collect();
        assert_eq!(row.serial_number(), None);
    }
}
