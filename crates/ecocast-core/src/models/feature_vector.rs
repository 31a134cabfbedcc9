use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};
use std::sync::Arc;

use crate::errors::ConfigurationError;
use crate::models::Stage;

/// Ordered feature names a stage's model was trained on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSchema {
    pub stage: Stage,
    pub names: Vec<String>,
}

impl FeatureSchema {
    pub fn new(stage: Stage, names: Vec<String>) -> Self {
        Self { stage, names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Fixed-schema numeric input for one stage.
///
/// Values are stored in schema order; the schema is shared, so building a
/// vector per request never copies feature names.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    schema: Arc<FeatureSchema>,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Pair a schema with its values.
    ///
    /// # Errors
    /// `SchemaMismatch` if the value count differs from the schema length.
    pub fn new(schema: Arc<FeatureSchema>, values: Vec<f64>) -> Result<Self, ConfigurationError> {
        if values.len() != schema.len() {
            return Err(ConfigurationError::SchemaMismatch {
                stage: schema.stage,
                feature: "<all>".to_string(),
                reason: format!(
                    "schema has {} features, {} values supplied",
                    schema.len(),
                    values.len()
                ),
            });
        }
        Ok(Self { schema, values })
    }

    /// Build a vector with its own schema from `(name, value)` pairs.
    pub fn from_pairs<S: Into<String>>(stage: Stage, pairs: impl IntoIterator<Item = (S, f64)>) -> Self {
        let (names, values): (Vec<String>, Vec<f64>) =
            pairs.into_iter().map(|(n, v)| (n.into(), v)).unzip();
        Self {
            schema: Arc::new(FeatureSchema::new(stage, names)),
            values,
        }
    }

    pub fn stage(&self) -> Stage {
        self.schema.stage
    }

    pub fn schema(&self) -> &Arc<FeatureSchema> {
        &self.schema
    }

    pub fn names(&self) -> &[String] {
        self.schema.names()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of a named feature, if the schema carries it.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.schema.position(name).map(|i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.schema
            .names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FeatureVector", 2)?;
        state.serialize_field("stage", &self.schema.stage)?;
        state.serialize_field("features", &OrderedFeatures(self))?;
        state.end()
    }
}

struct OrderedFeatures<'a>(&'a FeatureVector);

impl Serialize for OrderedFeatures<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}
