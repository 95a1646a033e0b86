//! Named value store accumulated while scanning source files.
//!
//! A value collects every keyed item captured under its name, in source
//! order, plus one distinguished default item written by block-style and
//! unkeyed captures. The store lives for a whole template run; names
//! extending the reserved `global` prefix additionally survive the reset
//! between runs.

use serde::Serialize;
use std::collections::BTreeMap;

/// Values whose name extends this prefix survive between template runs.
pub const GLOBAL_PREFIX: &str = "global";

/// One captured record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Item {
    pub key: String,
    pub payload: String,
    pub comment: String,
    pub extracted: Vec<String>,
}

/// A named aggregate of captured items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Value {
    pub items: Vec<Item>,
    pub default: Item,
}

#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ValueStore {
    values: BTreeMap<String, Value>,
}

impl ValueStore {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn get_or_create(&mut self, name: &str) -> &mut Value {
        self.values.entry(name.to_string()).or_default()
    }

    /// Drop everything except global-prefixed values.
    pub fn retain_globals(&mut self) {
        self.values
            .retain(|name, _| name.len() > GLOBAL_PREFIX.len() && name.starts_with(GLOBAL_PREFIX));
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
