//! Tests for macro expansion and the expansion cache.

use pretty_assertions::assert_eq;

use super::*;

fn with_increment_macro() -> Interpreter {
    let mut interp = interp();
    run(&mut interp, "(def m (macro (vau (x) #ign (list + x 1))))");
    run(&mut interp, "(def f (lambda () (m 41)))");
    interp
}

#[test]
fn expansion_is_evaluated_in_place() {
    let mut interp = with_increment_macro();
    assert_eq!(run(&mut interp, "(f)"), Value::Int(42));
}

#[test]
fn expander_sees_unevaluated_operands() {
    let mut interp = interp();
    run(&mut interp, "(def swap (macro (vau (a b) #ign (list b a))))");
    assert_eq!(run_written(&mut interp, "(swap 2 (lambda (x) (* x 10)))"), "20");
}

#[test]
fn each_form_expands_once() {
    let mut interp = with_increment_macro();
    run(&mut interp, "(f)");
    assert_eq!(interp.macro_cache().expansions(), 1);
    assert_eq!(run(&mut interp, "(f)"), Value::Int(42));
    assert_eq!(interp.macro_cache().expansions(), 1);
    assert_eq!(interp.macro_cache().len(), 1);
}

#[test]
fn distinct_forms_expand_separately() {
    let mut interp = with_increment_macro();
    run(&mut interp, "(m 1)");
    run(&mut interp, "(m 1)");
    assert_eq!(interp.macro_cache().expansions(), 2);
}

#[test]
fn rebinding_the_macro_forces_reexpansion() {
    let mut interp = with_increment_macro();
    assert_eq!(run(&mut interp, "(f)"), Value::Int(42));
    run(&mut interp, "(def m (macro (vau (x) #ign (list * x 2))))");
    assert_eq!(run(&mut interp, "(f)"), Value::Int(82));
    assert_eq!(interp.macro_cache().expansions(), 2);
}

#[test]
fn expansion_can_suspend() {
    let mut interp = interp();
    run(
        &mut interp,
        "(def m (macro (vau (x) #ign (take-subcont 'p k (push-subcont k (list + x 100))))))",
    );
    assert_eq!(run(&mut interp, "(push-prompt 'p (m 1))"), Value::Int(101));
    assert_eq!(interp.macro_cache().len(), 1);
}

#[test]
fn macro_defined_control_form() {
    let mut interp = interp();
    run(
        &mut interp,
        "(def when (macro (vau (test . body) #ign (list if test (cons begin body) #void))))",
    );
    assert_eq!(run(&mut interp, "(when #t 1 2)"), Value::Int(2));
    assert_eq!(run_written(&mut interp, "(when #f 1 2)"), "#void");
}
