use super::*;
use proptest::prelude::*;
use wat_ir::StringInterner;

#[test]
fn test_define_lookup() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let mut envs = Environments::new();
    let root = envs.alloc(None);
    envs.define(root, x, Value::Int(42));
    assert_eq!(envs.lookup(root, x), Some(&Value::Int(42)));
}

#[test]
fn test_shadowing_leaves_parent_alone() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let mut envs = Environments::new();
    let parent = envs.alloc(None);
    envs.define(parent, x, Value::Int(1));
    let child = envs.alloc(Some(parent));
    envs.define(child, x, Value::Int(2));

    assert_eq!(envs.lookup(child, x), Some(&Value::Int(2)));
    assert_eq!(envs.lookup(parent, x), Some(&Value::Int(1)));
}

#[test]
fn test_lookup_walks_outward() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");

    let mut envs = Environments::new();
    let root = envs.alloc(None);
    let middle = envs.alloc(Some(root));
    let leaf = envs.alloc(Some(middle));
    envs.define(root, x, Value::Int(1));

    assert_eq!(envs.lookup(leaf, x), Some(&Value::Int(1)));
    assert!(envs.is_bound(leaf, x));
    assert_eq!(envs.lookup(leaf, y), None);
    assert_eq!(envs.parent(leaf), Some(middle));
    assert_eq!(envs.parent(root), None);
}

#[test]
fn test_redefine_replaces_local_binding() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let mut envs = Environments::new();
    let root = envs.alloc(None);
    envs.define(root, x, Value::Int(1));
    envs.define(root, x, Value::Int(2));
    assert_eq!(envs.lookup(root, x), Some(&Value::Int(2)));
    assert_eq!(envs.len(), 1);
}

proptest! {
    #[test]
    fn child_definitions_never_leak_to_parent(
        names in proptest::collection::vec("[a-z]{1,6}", 1..20),
        parent_value in any::<i64>(),
        child_value in any::<i64>(),
    ) {
        let interner = StringInterner::new();
        let mut envs = Environments::new();
        let parent = envs.alloc(None);
        let child = envs.alloc(Some(parent));
        for name in &names {
            envs.define(parent, interner.intern(name), Value::Int(parent_value));
        }
        for name in &names {
            envs.define(child, interner.intern(name), Value::Int(child_value));
        }
        for name in &names {
            let name = interner.intern(name);
            prop_assert_eq!(envs.lookup(parent, name), Some(&Value::Int(parent_value)));
            prop_assert_eq!(envs.lookup(child, name), Some(&Value::Int(child_value)));
        }
    }
}
