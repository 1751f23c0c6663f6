//! Mutable heap objects: dynamic variables, user types, hashtables.

use std::cell::RefCell;

use rustc_hash::FxHashMap;

use super::{Heap, IdentityKey, Value};

/// Dynamic variable cell.
#[derive(Debug)]
pub struct DynamicCell {
    value: RefCell<Value>,
}

impl DynamicCell {
    pub(crate) fn new(value: Value) -> Self {
        DynamicCell {
            value: RefCell::new(value),
        }
    }

    pub fn get(&self) -> Value {
        self.value.borrow().clone()
    }

    /// Install `value`, returning the previous binding.
    pub fn replace(&self, value: Value) -> Value {
        self.value.replace(value)
    }
}

/// Runtime type: a label plus a method table keyed by method name.
#[derive(Debug)]
pub struct TypeObject {
    label: RefCell<Option<Heap<str>>>,
    methods: RefCell<FxHashMap<Box<str>, Value>>,
}

impl TypeObject {
    pub(crate) fn new(label: Option<&str>) -> Self {
        TypeObject {
            label: RefCell::new(label.map(Heap::copy_from)),
            methods: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn label(&self) -> Option<Heap<str>> {
        self.label.borrow().clone()
    }

    pub fn set_label(&self, label: Heap<str>) {
        *self.label.borrow_mut() = Some(label);
    }

    pub fn put_method(&self, name: &str, method: Value) {
        self.methods.borrow_mut().insert(name.into(), method);
    }

    pub fn find_method(&self, name: &str) -> Option<Value> {
        self.methods.borrow().get(name).cloned()
    }
}

/// Instance of a user type produced by its tagger.
#[derive(Debug)]
pub struct Tagged {
    pub ty: Heap<TypeObject>,
    pub value: Value,
}

/// Hashtable keyed by value identity.
///
/// Entries keep their key alive so an address-based identity cannot be
/// reused while the entry exists.
#[derive(Debug, Default)]
pub struct IdentityTable {
    entries: RefCell<FxHashMap<IdentityKey, (Value, Value)>>,
}

impl IdentityTable {
    pub fn get(&self, key: &Value) -> Option<Value> {
        self.entries
            .borrow()
            .get(&key.identity())
            .map(|(_, value)| value.clone())
    }

    pub fn put(&self, key: &Value, value: Value) {
        self.entries
            .borrow_mut()
            .insert(key.identity(), (key.clone(), value));
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Hashtable keyed by string content.
#[derive(Debug, Default)]
pub struct StringTable {
    entries: RefCell<FxHashMap<Box<str>, Value>>,
}

impl StringTable {
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn put(&self, key: &str, value: Value) {
        self.entries.borrow_mut().insert(key.into(), value);
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
