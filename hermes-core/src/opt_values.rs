//! # Option Values
//!
//! The discovery result consumed by dynamic configuration forms. Top-level
//! entries list the selectable values of a field; `_rel` lists, per value of a
//! parent field, the values its dependent fields may take.
//!
//! ```json
//! {
//!   "cloud_id": [{ "id": "site1", "name": "Acme" }],
//!   "_rel": {
//!     "cloud_id": {
//!       "site1": { "project_key": [...], "issue_type": [...] }
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single selectable value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptValue {
  pub id: String,
  pub name: String,
}

impl OptValue {
  pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      name: name.into(),
    }
  }
}

/// Dependent field name to its selectable values
pub type DependentValues = BTreeMap<String, Vec<OptValue>>;

/// Discovery result for one provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptValues {
  #[serde(flatten)]
  pub values: BTreeMap<String, Vec<OptValue>>,
  /// Parent field name, then parent value id, then dependent values
  #[serde(rename = "_rel", default)]
  pub relations: BTreeMap<String, BTreeMap<String, DependentValues>>,
}

impl OptValues {
  /// Start a result for `field`, which is present in the output even when no
  /// values are found
  pub fn with_parent(field: &str) -> Self {
    let mut result = Self::default();
    result.values.insert(field.to_string(), Vec::new());
    result.relations.insert(field.to_string(), BTreeMap::new());
    result
  }

  pub fn push_value(&mut self, field: &str, value: OptValue) {
    self.values.entry(field.to_string()).or_default().push(value);
  }

  /// Record the values of `dependent` that are valid when `parent` is `parent_id`
  pub fn relate(&mut self, parent: &str, parent_id: &str, dependent: &str, values: Vec<OptValue>) {
    self
      .relations
      .entry(parent.to_string())
      .or_default()
      .entry(parent_id.to_string())
      .or_default()
      .insert(dependent.to_string(), values);
  }

  pub fn values(&self, field: &str) -> &[OptValue] {
    self.values.get(field).map(Vec::as_slice).unwrap_or_default()
  }

  pub fn related(&self, parent: &str, parent_id: &str) -> Option<&DependentValues> {
    self.relations.get(parent).and_then(|by_id| by_id.get(parent_id))
  }
}
