//! Tests for dynamic variables.

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn dnew_defaults_to_void() {
    assert_eq!(eval_written("(dref (dnew))"), "#void");
    assert_eq!(eval_written("(dref (dnew 3))"), "3");
}

#[test]
fn nested_bindings_restore() {
    let mut interp = interp();
    run(&mut interp, "(def cell (dnew 0))");
    assert_eq!(
        run(
            &mut interp,
            "(dlet* cell 1 (lambda () (dlet* cell 2 (lambda () (dref cell))) (dref cell)))"
        ),
        Value::Int(1)
    );
    assert_eq!(run(&mut interp, "(dref cell)"), Value::Int(0));
}

#[test]
fn dlet_binds_for_its_body() {
    let mut interp = interp();
    run(&mut interp, "(def d (dnew 0))");
    run(&mut interp, "(def read-d (lambda () (dref d)))");
    assert_eq!(run(&mut interp, "(dlet d 5 (read-d))"), Value::Int(5));
    assert_eq!(run(&mut interp, "(read-d)"), Value::Int(0));
}

#[test]
fn binding_restores_on_throw() {
    let mut interp = interp();
    run(&mut interp, "(def d (dnew 0))");
    assert_eq!(
        run(&mut interp, "(catch 'e (dlet d 1 (throw 'e (dref d))))"),
        Value::Int(1)
    );
    assert_eq!(run(&mut interp, "(dref d)"), Value::Int(0));
}

#[test]
fn binding_restores_on_error() {
    let mut interp = interp();
    run(&mut interp, "(def d (dnew 0))");
    run_err(&mut interp, "(dlet d 1 (fail \"boom\"))");
    assert_eq!(run(&mut interp, "(dref d)"), Value::Int(0));
}

#[test]
fn resumed_extent_sees_its_own_binding() {
    let mut interp = interp();
    run(&mut interp, "(def d (dnew 0))");
    run(
        &mut interp,
        "(def k (push-prompt 'p (dlet d 1 (take-subcont 'p k k) (dref d))))",
    );
    // Suspending out of the dlet restored the outer value.
    assert_eq!(run(&mut interp, "(dref d)"), Value::Int(0));

    assert_eq!(run(&mut interp, "(push-subcont k #void)"), Value::Int(1));
    assert_eq!(run(&mut interp, "(dref d)"), Value::Int(0));

    assert_eq!(run(&mut interp, "(dlet d 7 (push-subcont k #void))"), Value::Int(1));
    assert_eq!(run(&mut interp, "(dlet d 7 (push-subcont k #void) (dref d))"), Value::Int(7));
}

#[test]
fn code_outside_captured_bindings_sees_the_invoker() {
    let mut interp = interp();
    run(&mut interp, "(def d (dnew 0))");
    run(
        &mut interp,
        "(def k (push-prompt 'p (begin (take-subcont 'p k k) (dref d))))",
    );
    assert_eq!(run(&mut interp, "(dlet d 9 (push-subcont k #void))"), Value::Int(9));
    assert_eq!(run(&mut interp, "(push-subcont k #void)"), Value::Int(0));
}

#[test]
fn dref_requires_a_dynamic_variable() {
    let mut interp = interp();
    let err = run_err(&mut interp, "(dref 1)");
    assert_eq!(
        err.kind,
        crate::EvalErrorKind::TypeMismatch {
            expected: "dynamic variable".into(),
            got: "Number".into(),
        }
    );
}
