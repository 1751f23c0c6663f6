//! Tests for `throw*`, `catch*`, `finally` and `loop1`.

use pretty_assertions::assert_eq;

use super::*;
use crate::EvalErrorKind;

fn counter(interp: &mut Interpreter) {
    run(interp, "(def c (vector 0))");
    run(interp, "(def bump (lambda () (vector-set! c 0 (+ (vector-ref c 0) 1))))");
}

fn count(interp: &mut Interpreter) -> Value {
    run(interp, "(vector-ref c 0)")
}

mod catch_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn catch_returns_payload() {
        assert_eq!(eval_written("(catch 'e (+ 1 (throw 'e 41)))"), "41");
        assert_eq!(eval_written("(catch 'e 5)"), "5");
    }

    #[test]
    fn non_matching_tags_propagate() {
        assert_eq!(eval_written("(catch 'a (catch 'b (throw 'a 1)))"), "1");
    }

    #[test]
    fn tags_match_by_identity() {
        let mut interp = interp();
        let err = run_err(&mut interp, "(catch \"x\" (throw \"x\" 1))");
        assert!(matches!(err.kind, EvalErrorKind::UncaughtThrow { .. }));

        run(&mut interp, "(def tag (list 'mine))");
        assert_eq!(run(&mut interp, "(catch tag (throw tag 2))"), Value::Int(2));
    }

    #[test]
    fn uncaught_throw_keeps_the_exception() {
        let mut interp = interp();
        let err = run_err(&mut interp, "(throw 'oops 42)");
        assert_eq!(
            err.kind,
            EvalErrorKind::UncaughtThrow {
                tag: "oops".into(),
                payload: "42".into(),
            }
        );
        let thrown = err.thrown.as_deref().map(|t| t.payload.clone());
        assert_eq!(thrown, Some(Value::Int(42)));
    }

    #[test]
    fn catch_does_not_intercept_errors() {
        let mut interp = interp();
        let err = run_err(&mut interp, "(catch 'e (fail \"boom\"))");
        assert_eq!(
            err.kind,
            EvalErrorKind::Failure {
                message: "boom".into()
            }
        );
    }

    #[test]
    fn catch_inside_a_continuation_still_catches() {
        let mut interp = interp();
        run(
            &mut interp,
            "(def k (push-prompt 'p (catch 'e (if (take-subcont 'p k k) (throw 'e 99) 1))))",
        );
        assert_eq!(run(&mut interp, "(push-subcont k #f)"), Value::Int(1));
        assert_eq!(run(&mut interp, "(push-subcont k #t)"), Value::Int(99));
    }
}

mod finally_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cleanup_runs_after_normal_return() {
        let mut interp = interp();
        counter(&mut interp);
        assert_eq!(run(&mut interp, "(finally 5 (bump))"), Value::Int(5));
        assert_eq!(count(&mut interp), Value::Int(1));
    }

    #[test]
    fn cleanup_runs_once_on_throw() {
        let mut interp = interp();
        counter(&mut interp);
        assert_eq!(
            run(&mut interp, "(catch 'e (finally (throw 'e 42) (bump)))"),
            Value::Int(42)
        );
        assert_eq!(count(&mut interp), Value::Int(1));

        let err = run_err(&mut interp, "(finally (throw 'e 42) (bump))");
        assert!(matches!(err.kind, EvalErrorKind::UncaughtThrow { .. }));
        assert_eq!(
            err.thrown.map(|t| t.payload),
            Some(Value::Int(42))
        );
        assert_eq!(count(&mut interp), Value::Int(2));
    }

    #[test]
    fn cleanup_runs_on_error() {
        let mut interp = interp();
        counter(&mut interp);
        let err = run_err(&mut interp, "(finally (fail \"x\") (bump))");
        assert!(matches!(err.kind, EvalErrorKind::Failure { .. }));
        assert_eq!(count(&mut interp), Value::Int(1));
    }

    #[test]
    fn suspension_defers_cleanup() {
        let mut interp = interp();
        counter(&mut interp);
        run(
            &mut interp,
            "(def k (push-prompt 'p (finally (take-subcont 'p k k) (bump))))",
        );
        assert_eq!(count(&mut interp), Value::Int(0));
        assert_eq!(run(&mut interp, "(push-subcont k 5)"), Value::Int(5));
        assert_eq!(count(&mut interp), Value::Int(1));
        assert_eq!(run(&mut interp, "(push-subcont k 6)"), Value::Int(6));
        assert_eq!(count(&mut interp), Value::Int(2));
    }

    #[test]
    fn suspension_inside_cleanup_keeps_pending_result() {
        let mut interp = interp();
        run(&mut interp, "(def k (push-prompt 'p (finally 1 (take-subcont 'p k k))))");
        assert_eq!(run(&mut interp, "(push-subcont k 99)"), Value::Int(1));
    }
}

mod loop_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn loop_exits_through_throw() {
        let mut interp = interp();
        counter(&mut interp);
        assert_eq!(
            run(
                &mut interp,
                "(catch 'done (loop1 (if (num= (vector-ref c 0) 5) (throw 'done (vector-ref c 0)) (bump))))"
            ),
            Value::Int(5)
        );
    }

    #[test]
    fn loop_is_bounded_by_the_budget() {
        let mut interp = build(Interpreter::builder().mode(EvalMode::Budgeted { budget: 100 }));
        let err = run_err(&mut interp, "(loop1 1)");
        assert_eq!(err.kind, EvalErrorKind::BudgetExceeded { budget: 100 });
    }

    #[test]
    fn loop_resumes_inside_its_body() {
        let mut interp = interp();
        counter(&mut interp);
        run(
            &mut interp,
            "(def k (push-prompt 'p (catch 'done (loop1 (begin (bump) (if (num= (vector-ref c 0) 3) (throw 'done (take-subcont 'p k k)) #void))))))",
        );
        assert_eq!(run(&mut interp, "(push-subcont k 'finished)"), interp.symbol("finished"));
    }
}
