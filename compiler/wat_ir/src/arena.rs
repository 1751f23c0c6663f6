//! Pair storage.
//!
//! Every pair (source syntax and runtime lists alike) is allocated here and
//! referenced by [`PairId`]. Pairs are never mutated after construction.

use crate::{PairId, Value};

#[derive(Default)]
pub struct PairArena {
    pairs: Vec<(Value, Value)>,
}

impl PairArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a pair and return it as a value.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` pairs are allocated.
    pub fn cons(&mut self, car: Value, cdr: Value) -> Value {
        let index = u32::try_from(self.pairs.len())
            .unwrap_or_else(|_| panic!("pair arena exceeded {} pairs", u32::MAX));
        self.pairs.push((car, cdr));
        Value::Pair(PairId::new(index))
    }

    #[inline]
    pub fn car(&self, id: PairId) -> &Value {
        &self.pairs[id.index()].0
    }

    #[inline]
    pub fn cdr(&self, id: PairId) -> &Value {
        &self.pairs[id.index()].1
    }

    /// Both halves of a pair, cloned.
    #[inline]
    pub fn split(&self, id: PairId) -> (Value, Value) {
        let (car, cdr) = &self.pairs[id.index()];
        (car.clone(), cdr.clone())
    }

    /// Build a proper list.
    pub fn list<I>(&mut self, items: I) -> Value
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: DoubleEndedIterator,
    {
        self.list_star(items, Value::Nil)
    }

    /// Build a list ending in `tail` instead of nil.
    pub fn list_star<I>(&mut self, items: I, tail: Value) -> Value
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: DoubleEndedIterator,
    {
        items
            .into_iter()
            .rev()
            .fold(tail, |acc, item| self.cons(item, acc))
    }

    /// Collect a proper list into a vector. `None` for improper lists.
    pub fn list_to_vec(&self, list: &Value) -> Option<Vec<Value>> {
        let mut out = Vec::new();
        let mut cursor = list;
        loop {
            match cursor {
                Value::Nil => return Some(out),
                Value::Pair(id) => {
                    out.push(self.car(*id).clone());
                    cursor = self.cdr(*id);
                }
                _ => return None,
            }
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_round_trip() {
        let mut arena = PairArena::new();
        let list = arena.list([Value::Int(1), Value::Int(2), Value::Int(3)]);
        assert_eq!(
            arena.list_to_vec(&list).unwrap(),
            vec![Value::Int(1), Value::Int(2), Value::Int(3)]
        );
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_improper_list_is_not_a_vec() {
        let mut arena = PairArena::new();
        let dotted = arena.list_star([Value::Int(1)], Value::Int(2));
        assert!(arena.list_to_vec(&dotted).is_none());
        let Value::Pair(id) = dotted else {
            panic!("expected a pair");
        };
        assert_eq!(arena.cdr(id), &Value::Int(2));
    }

    #[test]
    fn test_empty_list_is_nil() {
        let mut arena = PairArena::new();
        assert_eq!(arena.list(Vec::new()), Value::Nil);
        assert!(arena.is_empty());
    }
}
