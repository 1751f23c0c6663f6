//! Per-form macro expansion cache.
//!
//! Keyed by the `PairId` of the combination being expanded. Source pairs are
//! never mutated, so a form's expansion only changes if its head evaluates
//! to a different macro; each entry remembers which macro produced it.

use rustc_hash::FxHashMap;
use wat_ir::{Heap, Macro, PairId, Value};

struct CachedExpansion {
    expander: Heap<Macro>,
    expansion: Value,
}

#[derive(Default)]
pub struct MacroCache {
    entries: FxHashMap<PairId, CachedExpansion>,
    expansions: usize,
}

impl MacroCache {
    /// Expansion cached for `form` by this exact `expander`.
    pub fn get(&self, form: PairId, expander: &Heap<Macro>) -> Option<Value> {
        self.entries
            .get(&form)
            .filter(|entry| Heap::ptr_eq(&entry.expander, expander))
            .map(|entry| entry.expansion.clone())
    }

    /// Record an expansion, replacing any entry left by another macro.
    pub fn insert(&mut self, form: PairId, expander: Heap<Macro>, expansion: Value) {
        self.expansions += 1;
        self.entries.insert(
            form,
            CachedExpansion {
                expander,
                expansion,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of times an expander actually ran to completion.
    pub fn expansions(&self) -> usize {
        self.expansions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn expander(value: &Value) -> Heap<Macro> {
        match value {
            Value::Macro(m) => m.clone(),
            _ => panic!("expected a macro"),
        }
    }

    #[test]
    fn test_hit_requires_same_macro() {
        let mut cache = MacroCache::default();
        let first = expander(&Value::make_macro(Value::Nil));
        let second = expander(&Value::make_macro(Value::Nil));
        let form = PairId::new(7);

        cache.insert(form, first.clone(), Value::Int(1));
        assert_eq!(cache.get(form, &first), Some(Value::Int(1)));
        assert_eq!(cache.get(form, &second), None);
        assert_eq!(cache.get(PairId::new(8), &first), None);
    }

    #[test]
    fn test_reinsert_replaces_entry() {
        let mut cache = MacroCache::default();
        let first = expander(&Value::make_macro(Value::Nil));
        let second = expander(&Value::make_macro(Value::Nil));
        let form = PairId::new(0);

        cache.insert(form, first, Value::Int(1));
        cache.insert(form, second.clone(), Value::Int(2));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.expansions(), 2);
        assert_eq!(cache.get(form, &second), Some(Value::Int(2)));
    }
}
