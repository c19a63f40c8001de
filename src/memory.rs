use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Caller-seeded presentation preferences
pub const STYLE_PREFERENCES: &str = "style_preferences";
/// Plan written by the Planner
pub const LAST_PLAN: &str = "last_plan";
/// Draft written by the Worker
pub const LAST_DRAFT: &str = "last_draft";
/// Result written by the Evaluator
pub const LAST_EVALUATION: &str = "last_evaluation";

/// Key-value store shared by the stages of a single run.
///
/// Writes overwrite silently. Reads always take a default, since no stage
/// may assume an earlier one left a key behind. Not synchronized: a run owns
/// its memory and the stages touch it one after another.
#[derive(Debug, Clone, Default)]
pub struct SessionMemory {
    store: Map<String, Value>,
}

impl SessionMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under `key`
    pub fn set<V: Serialize>(&mut self, key: impl Into<String>, value: &V) {
        let key = key.into();
        let value = serde_json::to_value(value).unwrap_or_else(|e| {
            tracing::warn!(key = %key, error = %e, "Value is not representable, storing null");
            Value::Null
        });
        self.store.insert(key, value);
    }

    /// Read `key` as `T`, falling back to `default` when absent or of another shape
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.store.get(key) {
            Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
                tracing::debug!(key, error = %e, "Stored value has unexpected shape, using default");
                default
            }),
            None => default,
        }
    }

    /// Raw access to a stored value
    pub fn get_value(&self, key: &str) -> Option<&Value> {
        self.store.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.store.contains_key(key)
    }

    /// Copy of the whole store
    pub fn snapshot(&self) -> Map<String, Value> {
        self.store.clone()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Drop every entry
    pub fn reset(&mut self) {
        self.store.clear();
    }
}
