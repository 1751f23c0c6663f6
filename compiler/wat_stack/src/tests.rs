use super::ensure_sufficient_stack;

fn depth(n: u64) -> u64 {
    ensure_sufficient_stack(|| if n == 0 { 0 } else { 1 + depth(n - 1) })
}

#[test]
fn test_deep_recursion_survives() {
    assert_eq!(depth(200_000), 200_000);
}

#[test]
fn test_returns_closure_result() {
    assert_eq!(ensure_sufficient_stack(|| "done"), "done");
}
