//! Flat variable environment for the rill evaluator.

use rill_types::Value;
use std::collections::BTreeMap;

/// The single run-wide variable store.
///
/// Exactly one instance exists per evaluator and it lives as long as the
/// run. There is no nesting and no per-call scope; `set` overwrites
/// unconditionally, and a name must be assigned before it can be read.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: BTreeMap<String, Value>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    /// Store a value under `name`, overwriting any prior value.
    pub fn set(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Look up a name. `None` if it was never assigned.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }
}
