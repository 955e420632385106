use std::collections::{BTreeSet, HashMap};

use serde::Deserialize;

use crate::fields;

/// Column titles of the standard Excel export and the keys they map to.
const DEFAULT_HEADERS: &[(&str, &str)] = &[
    ("ステータス", fields::STATUS),
    ("#通番", fields::SERIAL_NUMBER),
    ("顧客名", fields::CUSTOMER_NAME),
    ("月額料金（税抜き）", fields::MONTHLY_FEE),
    ("譲渡月数", fields::TRANSFER_MONTHS),
    ("契約/申込書", fields::CONTRACT_AND_APPLICATION_FORM),
    ("初期費用", fields::INITIAL_COST),
    ("申込日", fields::APPLICATION_DATE),
    ("サービス/課金開始日", fields::SERVICE_AND_BILLING_START_DATE),
    ("譲渡申込期日", fields::TRANSFER_APPLICATION_DEADLINE),
    ("譲渡実行日", fields::TRANSFER_EXECUTION_DATE),
    ("失注理由", fields::REASON_FOR_LOSS_ORDER),
    ("説明", fields::EXPLANATION),
];

/// Raw CSV header → canonical field key.
///
/// Headers without an entry are dropped during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct HeaderMapping {
    entries: HashMap<String, String>,
}

impl HeaderMapping {
    /// An empty mapping; every header is dropped.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Canonical key for a raw header, `None` when the column is ignored.
    ///
    /// An entry mapping to the empty string also ignores the column.
    pub fn resolve(&self, header: &str) -> Option<&str> {
        self.entries
            .get(header)
            .map(String::as_str)
            .filter(|key| !key.is_empty())
    }

    /// Adds every entry of `other`, replacing existing headers.
    pub fn merge(&mut self, other: HeaderMapping) {
        self.entries.extend(other.entries);
    }

    /// Distinct canonical keys this mapping can produce.
    pub fn canonical_keys(&self) -> BTreeSet<&str> {
        self.entries
            .values()
            .map(String::as_str)
            .filter(|key| !key.is_empty())
            .collect()
    }

    /// Entries sorted by raw header.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(header, key)| (header.as_str(), key.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HeaderMapping {
    fn default() -> Self {
        DEFAULT_HEADERS.iter().copied().collect()
    }
}

impl<H, K> FromIterator<(H, K)> for HeaderMapping
where
    H: Into<String>,
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (H, K)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(header, key)| (header.into(), key.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mapping_covers_export_columns() {
        let mapping = HeaderMapping::default();
        assert_eq!(mapping.len(), 13);
        assert_eq!(mapping.resolve("#通番"), Some("serial_number"));
        assert_eq!(mapping.resolve("初期費用"), Some("Initial_cost"));
        assert_eq!(mapping.resolve("備考"), None);
    }

    #[test]
    fn empty_key_drops_column() {
        let mapping: HeaderMapping = [("メモ", "")].into_iter().collect();
        assert_eq!(mapping.resolve("メモ"), None);
        assert!(mapping.canonical_keys().is_empty());
    }
}
