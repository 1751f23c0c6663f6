//! Arena indices.

use std::fmt;

/// Index of a pair in the [`PairArena`](crate::PairArena).
///
/// Pairs are immutable, so the index doubles as the identity of a syntax
/// node: the macro cache is keyed by it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct PairId(u32);

impl PairId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        PairId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PairId({})", self.0)
    }
}

/// Index of an environment record.
///
/// The records themselves live in the evaluator's environment arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct EnvId(u32);

impl EnvId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        EnvId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for EnvId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnvId({})", self.0)
    }
}
