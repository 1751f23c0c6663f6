use super::*;
use crate::EnvId;

#[test]
fn test_factory_sets_kind_and_message() {
    let err = unbound_identifier("frob");
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundIdentifier {
            name: "frob".to_owned()
        }
    );
    assert_eq!(err.message, "unbound identifier: frob");
}

#[test]
fn test_notes_are_displayed() {
    let err = division_by_zero().with_note("in (/ 1 0)");
    assert_eq!(err.to_string(), "division by zero\n  note: in (/ 1 0)");
}

#[test]
fn test_uncaught_throw_keeps_exception() {
    let err = uncaught_throw(
        Thrown {
            tag: Value::Int(1),
            payload: Value::Int(42),
        },
        "1".to_owned(),
        "42".to_owned(),
    );
    let thrown = err.thrown.as_deref().map(|t| t.payload.clone());
    assert_eq!(thrown, Some(Value::Int(42)));
    assert_eq!(err.message, "uncaught throw to 1 with 42");
}

#[test]
fn test_on_suspend_only_touches_suspensions() {
    let suspended: EvalResult = Err(Suspension::new(Value::Int(0), Value::Nil).into());
    let Err(ControlAction::Suspend(s)) = suspended.on_suspend(|| Frame::Reinstate) else {
        panic!("expected a suspension");
    };
    assert_eq!(s.frames().len(), 2);

    let thrown: EvalResult = Err(ControlAction::throw(Value::Int(0), Value::Nil));
    let thrown = thrown.on_suspend(|| unreachable!("frame built for a throw"));
    assert!(matches!(thrown, Err(ControlAction::Throw(_))));

    let ok: EvalResult = Ok(Value::Int(3));
    let ok = ok.on_suspend(|| Frame::Define {
        env: EnvId::new(0),
        operands: Value::Nil,
    });
    assert_eq!(ok.ok(), Some(Value::Int(3)));
}
