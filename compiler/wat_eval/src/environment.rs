//! First-class environments.
//!
//! Environments are records in an arena addressed by [`EnvId`]. A record
//! holds its own bindings plus an optional parent; lookup walks outward,
//! definition always writes the record itself, so a child can shadow a
//! parent binding but never change it.

use rustc_hash::FxHashMap;
use wat_ir::{EnvId, Name, Value};

struct EnvRecord {
    parent: Option<EnvId>,
    bindings: FxHashMap<Name, Value>,
}

#[derive(Default)]
pub struct Environments {
    records: Vec<EnvRecord>,
}

impl Environments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an empty environment.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` environments are allocated.
    pub fn alloc(&mut self, parent: Option<EnvId>) -> EnvId {
        let index = u32::try_from(self.records.len())
            .unwrap_or_else(|_| panic!("environment arena exceeded {} records", u32::MAX));
        self.records.push(EnvRecord {
            parent,
            bindings: FxHashMap::default(),
        });
        EnvId::new(index)
    }

    pub fn parent(&self, env: EnvId) -> Option<EnvId> {
        self.records[env.index()].parent
    }

    /// Bind `name` in `env` itself, replacing any binding already there.
    pub fn define(&mut self, env: EnvId, name: Name, value: Value) {
        self.records[env.index()].bindings.insert(name, value);
    }

    /// Innermost binding of `name` visible from `env`.
    pub fn lookup(&self, env: EnvId, name: Name) -> Option<&Value> {
        let mut current = Some(env);
        while let Some(id) = current {
            let record = &self.records[id.index()];
            if let Some(value) = record.bindings.get(&name) {
                return Some(value);
            }
            current = record.parent;
        }
        None
    }

    pub fn is_bound(&self, env: EnvId, name: Name) -> bool {
        self.lookup(env, name).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests;
