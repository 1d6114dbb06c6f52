use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog;

/// One key/value row in the editing representation.
///
/// An empty key is tolerated while the row is being edited but the row is
/// skipped by URL construction and persistence. An empty value is kept: a key
/// sent with no value is not the same as a key not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl OverrideEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Whether this row takes part in URL construction and persistence.
    pub fn is_effective(&self) -> bool {
        !self.key.is_empty()
    }
}

/// Ordered, duplicate-tolerant list of override rows.
///
/// Order is what the operator sees and is also the order overrides are
/// appended to generated URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Overrides(Vec<OverrideEntry>);

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[OverrideEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&OverrideEntry> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OverrideEntry> {
        self.0.iter()
    }

    /// Rows with a non-empty key, in edit order.
    pub fn effective(&self) -> impl Iterator<Item = &OverrideEntry> {
        self.0.iter().filter(|e| e.is_effective())
    }

    /// Insert a blank row at the top of the list.
    pub fn prepend(&mut self) {
        self.0.insert(0, OverrideEntry::default());
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push(OverrideEntry::new(key, value));
    }

    /// Remove a row, returning it. `None` if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<OverrideEntry> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    /// Set the key of a row.
    ///
    /// Choosing a documented key clears the row's value so the catalog's
    /// placeholder shows. Returns false if `index` is out of range.
    pub fn select_key(&mut self, index: usize, key: impl Into<String>) -> bool {
        let Some(entry) = self.0.get_mut(index) else {
            return false;
        };
        entry.key = key.into();
        if catalog::is_known(&entry.key) {
            entry.value.clear();
        }
        true
    }

    /// Set the value of a row. Returns false if `index` is out of range.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.0.get_mut(index) {
            Some(entry) => {
                entry.value = value.into();
                true
            }
            None => false,
        }
    }
}

impl From<Vec<OverrideEntry>> for Overrides {
    fn from(entries: Vec<OverrideEntry>) -> Self {
        Self(entries)
    }
}

impl FromIterator<OverrideEntry> for Overrides {
    fn from_iter<I: IntoIterator<Item = OverrideEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Overrides {
    type Item = &'a OverrideEntry;
    type IntoIter = std::slice::Iter<'a, OverrideEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A numeric field as it arrives from a form, flag or JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Integer(v) => write!(f, "{}", v),
            RawValue::Float(v) => write!(f, "{}", v),
            RawValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Integer(v)
    }
}

impl From<u32> for RawValue {
    fn from(v: u32) -> Self {
        RawValue::Integer(i64::from(v))
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Float(v)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        RawValue::Text(v.to_string())
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        RawValue::Text(v)
    }
}

/// Unvalidated configuration input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawConfiguration {
    #[serde(default)]
    pub placement_count: Option<RawValue>,
    #[serde(default)]
    pub width: Option<RawValue>,
    #[serde(default)]
    pub height: Option<RawValue>,
    #[serde(default)]
    pub overrides: Vec<OverrideEntry>,
}

impl RawConfiguration {
    pub fn new(
        placement_count: impl Into<RawValue>,
        width: impl Into<RawValue>,
        height: impl Into<RawValue>,
    ) -> Self {
        Self {
            placement_count: Some(placement_count.into()),
            width: Some(width.into()),
            height: Some(height.into()),
            overrides: Vec::new(),
        }
    }

    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.push(OverrideEntry::new(key, value));
        self
    }
}

impl From<&ConfigurationModel> for RawConfiguration {
    /// Raw form of a model, used as the starting point for further edits.
    fn from(model: &ConfigurationModel) -> Self {
        Self {
            overrides: model.overrides().as_slice().to_vec(),
            ..Self::new(model.placement_count(), model.width(), model.height())
        }
    }
}

pub const DEFAULT_PLACEMENT_COUNT: u32 = 1;
pub const DEFAULT_WIDTH: u32 = 300;
pub const DEFAULT_HEIGHT: u32 = 250;
pub const MAX_PLACEMENT_COUNT: u32 = 20;

/// A validated configuration.
///
/// The numeric fields are private so the only ways to change them are the
/// validating setters; a model in hand is always buildable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigurationModel {
    placement_count: u32,
    width: u32,
    height: u32,
    overrides: Overrides,
}

impl ConfigurationModel {
    /// Build from already range-checked parts.
    pub(crate) fn from_parts(
        placement_count: u32,
        width: u32,
        height: u32,
        overrides: Overrides,
    ) -> Self {
        Self {
            placement_count,
            width,
            height,
            overrides,
        }
    }

    pub fn placement_count(&self) -> u32 {
        self.placement_count
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    pub fn overrides_mut(&mut self) -> &mut Overrides {
        &mut self.overrides
    }

    pub(crate) fn set_placement_count_unchecked(&mut self, value: u32) {
        self.placement_count = value;
    }

    pub(crate) fn set_width_unchecked(&mut self, value: u32) {
        self.width = value;
    }

    pub(crate) fn set_height_unchecked(&mut self, value: u32) {
        self.height = value;
    }
}

impl Default for ConfigurationModel {
    fn default() -> Self {
        Self::from_parts(
            DEFAULT_PLACEMENT_COUNT,
            DEFAULT_WIDTH,
            DEFAULT_HEIGHT,
            Overrides::new(),
        )
    }
}
