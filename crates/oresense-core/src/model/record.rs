use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::field::Field;
use crate::taxonomy::Choice;

/// The values collected for one assessment session.
///
/// Every [`Field`] is always present; an unanswered field holds the empty
/// string. Values are kept as entered so the record reads back exactly what
/// the wizard accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Field, String>", into = "BTreeMap<Field, String>")]
pub struct FormRecord {
    values: BTreeMap<Field, String>,
}

impl FormRecord {
    /// A record with every field empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: Field::ALL
                .into_iter()
                .map(|field| (field, String::new()))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    pub(crate) fn set(&mut self, field: Field, value: String) {
        self.values.insert(field, value);
    }

    #[must_use]
    pub fn is_filled(&self, field: Field) -> bool {
        !self.get(field).trim().is_empty()
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        Field::ALL.into_iter().filter(|f| self.is_filled(*f)).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }

    /// Parse a numeric field. `None` when empty or not a number.
    #[must_use]
    pub fn number(&self, field: Field) -> Option<f64> {
        self.get(field).trim().parse().ok()
    }

    /// Resolve an enumerated field into its vocabulary type.
    #[must_use]
    pub fn choice<C: Choice>(&self, field: Field) -> Option<C> {
        C::from_value(self.get(field).trim())
    }

    /// Fields and values in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }
}

impl Default for FormRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BTreeMap<Field, String>> for FormRecord {
    fn from(values: BTreeMap<Field, String>) -> Self {
        let mut record = Self::new();
        record.values.extend(values);
        record
    }
}

impl From<FormRecord> for BTreeMap<Field, String> {
    fn from(record: FormRecord) -> Self {
        record.values
    }
}
