//! Validation settings.
//!
//! The defaults are the business rules of the standard import; a TOML file
//! can override them per deployment.

use serde::Deserialize;

use crate::fields;

/// Rule parameters for the validation engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Fields checked for date validity and the allowed time window.
    pub date_fields: Vec<String>,
    /// How many months back a date may lie before it is rejected.
    pub past_limit_months: u32,
    /// Minimum distance in months from service start to transfer execution.
    pub transfer_offset_months: u32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            date_fields: vec![
                fields::APPLICATION_DATE.to_string(),
                fields::SERVICE_AND_BILLING_START_DATE.to_string(),
                fields::TRANSFER_APPLICATION_DEADLINE.to_string(),
            ],
            past_limit_months: 3,
            transfer_offset_months: 2,
        }
    }
}

impl ValidationConfig {
    #[must_use]
    pub fn with_past_limit_months(mut self, months: u32) -> Self {
        self.past_limit_months = months;
        self
    }

    #[must_use]
    pub fn with_transfer_offset_months(mut self, months: u32) -> Self {
        self.transfer_offset_months = months;
        self
    }

    #[must_use]
    pub fn with_date_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.date_fields = fields.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: ValidationConfig = toml::from_str("past_limit_months = 6").expect("parse");
        assert_eq!(config.past_limit_months, 6);
        assert_eq!(config.transfer_offset_months, 2);
        assert_eq!(config.date_fields.len(), 3);
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(toml::from_str::<ValidationConfig>("past_limit = 6").is_err());
    }
}
