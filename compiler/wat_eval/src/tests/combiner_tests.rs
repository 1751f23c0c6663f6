//! Tests for the combiner protocol, the built-in operatives and patterns.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

mod evaluation_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn literals_evaluate_to_themselves() {
        assert_eq!(eval_written("42"), "42");
        assert_eq!(eval_written("\"s\""), "\"s\"");
        assert_eq!(eval_written("#ign"), "#ign");
        assert_eq!(eval_written("()"), "()");
    }

    #[test]
    fn lookup_is_lexical_and_shadowed() {
        let mut interp = interp();
        run(&mut interp, "(def x 1) (def f (lambda () x)) (def g (lambda (x) (f)))");
        assert_eq!(run(&mut interp, "(g 2)"), Value::Int(1));
        assert_eq!(run(&mut interp, "((lambda (x) x) 5)"), Value::Int(5));
        assert_eq!(run(&mut interp, "x"), Value::Int(1));
    }

    #[test]
    fn operatives_receive_operands_unevaluated() {
        let mut interp = interp();
        run(&mut interp, "(def op (vau (x) #ign x))");
        assert_eq!(run_written(&mut interp, "(op (+ 1 2))"), "(+ 1 2)");
    }

    #[test]
    fn operatives_receive_the_calling_environment() {
        let mut interp = interp();
        run(&mut interp, "(def get-env (vau () e e))");
        assert_eq!(run(&mut interp, "(eq? (get-env) (get-env))"), Value::Bool(true));
        assert_eq!(
            run(&mut interp, "(eq? (get-env) ((lambda () (get-env))))"),
            Value::Bool(false)
        );
    }

    #[test]
    fn applicative_operands_evaluate_left_to_right() {
        let mut interp = interp();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let record = Rc::clone(&seen);
        interp.define_host_fn("rec", move |_, args| {
            if let Some(Value::Int(n)) = args.first() {
                record.borrow_mut().push(*n);
            }
            Ok(args.first().cloned().unwrap_or(Value::Void))
        });

        assert_eq!(
            run_written(&mut interp, "(list (rec 1) (rec 2) (rec 3))"),
            "(1 2 3)"
        );
        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn wrap_and_unwrap() {
        assert_eq!(eval_written("((unwrap list) a b)"), "(a b)");
        assert_eq!(eval_written("((wrap (vau (x) #ign x)) (+ 1 2))"), "3");
    }

    #[test]
    fn eval_uses_the_given_environment() {
        let mut interp = interp();
        run(&mut interp, "(def get-env (vau () e e))");
        assert_eq!(
            run(&mut interp, "(eval (car (read-from-string \"(+ 1 2)\")) (get-env))"),
            Value::Int(3)
        );
        assert_eq!(run(&mut interp, "(eval (list + 1 2) (make-environment))"), Value::Int(3));
    }

    #[test]
    fn deep_recursion_does_not_overflow() {
        let mut interp = interp();
        run(
            &mut interp,
            "(def count (lambda (n) (if (num= n 0) 0 (count (- n 1)))))",
        );
        assert_eq!(run(&mut interp, "(count 10000)"), Value::Int(0));
    }
}

mod form_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn only_false_is_false() {
        assert_eq!(eval_written("(if #f 1 2)"), "2");
        assert_eq!(eval_written("(if () 1 2)"), "1");
        assert_eq!(eval_written("(if 0 1 2)"), "1");
    }

    #[test]
    fn if_evaluates_one_branch() {
        let mut interp = interp();
        run(&mut interp, "(def hits (vector 0))");
        run(
            &mut interp,
            "(if #t 1 (vector-set! hits 0 1))",
        );
        assert_eq!(run(&mut interp, "(vector-ref hits 0)"), Value::Int(0));
    }

    #[test]
    fn begin_sequences_and_returns_last() {
        assert_eq!(eval_written("(begin)"), "#void");
        assert_eq!(eval_written("(begin 1 2 3)"), "3");
        assert_eq!(eval_written("(begin (def a 1) (def a (+ a 1)) a)"), "2");
    }

    #[test]
    fn def_returns_value_and_destructures() {
        let mut interp = interp();
        assert_eq!(run(&mut interp, "(def x 7)"), Value::Int(7));
        run(&mut interp, "(def (a b . c) (list 1 2 3 4))");
        assert_eq!(run_written(&mut interp, "(list a b c)"), "(1 2 (3 4))");
        run(&mut interp, "(def (#ign y) (list 1 2))");
        assert_eq!(run(&mut interp, "y"), Value::Int(2));
    }

    #[test]
    fn make_environment_and_defined() {
        let mut interp = interp();
        run(&mut interp, "(def get-env (vau () e e))");
        run(&mut interp, "(def child (make-environment (get-env)))");
        assert_eq!(run(&mut interp, "(eval (list def 'z 1) child)"), Value::Int(1));
        assert_eq!(run(&mut interp, "(defined? 'z child)"), Value::Bool(true));
        assert_eq!(run(&mut interp, "(defined? 'z (get-env))"), Value::Bool(false));
        assert_eq!(run(&mut interp, "(defined? 'car child)"), Value::Bool(true));
    }

    #[test]
    fn host_functions_bind_as_applicatives() {
        let mut interp = interp();
        interp.define_host_fn("double", |_, args| match args {
            [Value::Int(n)] => Ok(Value::Int(n * 2)),
            _ => Err(EvalError::new("double expects an integer")),
        });
        assert_eq!(run(&mut interp, "(double (+ 20 1))"), Value::Int(42));
    }

    #[test]
    fn prelude_can_be_disabled() {
        let mut interp = build(Interpreter::builder().mode(EvalMode::TestRun).prelude(false));
        assert!(interp.lookup("lambda").is_none());
        assert_eq!(run(&mut interp, "((vau (x) #ign x) y)"), interp.symbol("y"));
    }
}

mod printer_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn combiners_print_opaquely() {
        assert_eq!(eval_written("(vau (x) #ign x)"), "#[operative]");
        assert_eq!(eval_written("(lambda (x) x)"), "#[applicative #[operative]]");
        assert_eq!(eval_written("+"), "#[applicative #[primitive +]]");
        assert_eq!(eval_written("if"), "#[form if]");
        assert_eq!(eval_written("eval"), "#[applicative #[form eval]]");
    }

    #[test]
    fn lists_print_with_dotted_tails() {
        assert_eq!(eval_written("(cons 1 2)"), "(1 . 2)");
        assert_eq!(eval_written("(list* 1 2 '(3))"), "(1 2 3)");
        assert_eq!(eval_written("'(a \"b\" 2.5)"), "(a \"b\" 2.5)");
    }
}

proptest! {
    #[test]
    fn addition_matches_host_arithmetic(a in any::<i32>(), b in any::<i32>()) {
        let mut interp = interp();
        let value = run(&mut interp, &format!("(+ {a} {b})"));
        prop_assert_eq!(value, Value::Int(i64::from(a) + i64::from(b)));
    }
}
