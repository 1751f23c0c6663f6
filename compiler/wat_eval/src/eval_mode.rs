//! Evaluation modes.
//!
//! `EvalMode` selects output routing and the step budget through policy
//! methods; `ModeState` carries the per-run counters.

use wat_ir::{errors::budget_exceeded, EvalError};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Output to stdout, no step limit.
    #[default]
    Interpret,
    /// Output captured in a buffer for assertions.
    TestRun,
    /// Silent and bounded: aborts after `budget` evaluation steps.
    Budgeted { budget: u32 },
}

impl EvalMode {
    /// Whether `display` may write to the process stdout.
    #[inline]
    pub fn allows_io(&self) -> bool {
        matches!(self, Self::Interpret)
    }

    /// Step limit, or `None` for unlimited.
    #[inline]
    pub fn step_budget(&self) -> Option<u32> {
        match self {
            Self::Budgeted { budget } => Some(*budget),
            Self::Interpret | Self::TestRun => None,
        }
    }
}

/// Mutable per-mode state.
#[derive(Debug)]
pub struct ModeState {
    /// Combinations and loop iterations performed so far.
    pub steps: usize,
    budget: Option<u32>,
}

impl ModeState {
    pub fn new(mode: &EvalMode) -> Self {
        ModeState {
            steps: 0,
            budget: mode.step_budget(),
        }
    }

    /// Count one step; fails once the budget is used up.
    #[inline]
    pub fn check_budget(&mut self) -> Result<(), EvalError> {
        self.steps = self.steps.saturating_add(1);
        match self.budget {
            Some(budget) if self.steps > budget as usize => Err(budget_exceeded(budget)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_interpret_writes_stdout() {
        assert!(EvalMode::Interpret.allows_io());
        assert!(!EvalMode::TestRun.allows_io());
        assert!(!EvalMode::Budgeted { budget: 1 }.allows_io());
    }

    #[test]
    fn test_budget_trips_after_limit() {
        let mut state = ModeState::new(&EvalMode::Budgeted { budget: 2 });
        assert!(state.check_budget().is_ok());
        assert!(state.check_budget().is_ok());
        assert!(state.check_budget().is_err());
    }

    #[test]
    fn test_unbudgeted_modes_only_count() {
        let mut state = ModeState::new(&EvalMode::Interpret);
        for _ in 0..1000 {
            assert!(state.check_budget().is_ok());
        }
        assert_eq!(state.steps, 1000);
    }
}
