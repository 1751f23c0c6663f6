//! Continuation frames.
//!
//! A suspension unwinds from `take-subcont*` out to its prompt. Every
//! suspendable step it passes through pushes one [`Frame`] describing how
//! to redo that step once a value is supplied. The resulting chain is
//! innermost-first; resuming replays it from the outermost frame inward.
//!
//! Frames are plain data. Replaying a frame never mutates it, so a captured
//! chain can be resumed any number of times.

use smallvec::SmallVec;

use crate::{EnvId, EvalResult, Heap, Macro, PairId, Value};

/// Arguments already evaluated when an applicative's operand list suspended.
pub type EvaluatedArgs = SmallVec<[Value; 4]>;

/// One suspended evaluation step.
#[derive(Clone, Debug)]
pub enum Frame {
    /// The `take-subcont*` call itself: the resumed value is its result.
    Capture,
    /// Evaluating the operator of `form`.
    Operator { env: EnvId, form: PairId },
    /// Evaluating the head of `todo`; `done` holds the earlier arguments.
    Arguments {
        env: EnvId,
        combiner: Value,
        done: EvaluatedArgs,
        todo: Value,
    },
    /// Evaluating the value expression of a `def`.
    Define { env: EnvId, operands: Value },
    /// Evaluating the test of an `if`.
    Branch { env: EnvId, operands: Value },
    /// Evaluating the head of `body` inside a `begin`.
    Sequence { env: EnvId, body: Value },
    /// Evaluating the body of a `loop1`.
    Loop { env: EnvId, operands: Value },
    /// Inside the thunk of a `catch*`.
    Catch { env: EnvId, operands: Value },
    /// Inside the protected part of a `finally`.
    Protect { env: EnvId, operands: Value },
    /// Inside the cleanup of a `finally`; `pending` is what it finishes with.
    Cleanup {
        env: EnvId,
        cleanup: Value,
        pending: EvalResult,
    },
    /// Inside the thunk of a `dlet*`.
    DynamicBinding { env: EnvId, operands: Value },
    /// Inside the thunk of a `push-prompt*` with a different prompt.
    Prompt { env: EnvId, operands: Value },
    /// Inside a continuation reinstated by `push-subcont*`.
    Reinstate,
    /// Running the expander of `expander` over `form`.
    MacroExpansion {
        env: EnvId,
        form: PairId,
        expander: Heap<Macro>,
    },
}

impl Frame {
    /// Short name for logs and diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            Frame::Capture => "capture",
            Frame::Operator { .. } => "operator",
            Frame::Arguments { .. } => "arguments",
            Frame::Define { .. } => "def",
            Frame::Branch { .. } => "if",
            Frame::Sequence { .. } => "begin",
            Frame::Loop { .. } => "loop1",
            Frame::Catch { .. } => "catch*",
            Frame::Protect { .. } => "finally",
            Frame::Cleanup { .. } => "finally cleanup",
            Frame::DynamicBinding { .. } => "dlet*",
            Frame::Prompt { .. } => "push-prompt*",
            Frame::Reinstate => "push-subcont*",
            Frame::MacroExpansion { .. } => "macro expansion",
        }
    }
}

/// Suspension travelling out to its prompt.
#[derive(Clone, Debug)]
pub struct Suspension {
    pub prompt: Value,
    pub handler: Value,
    frames: Vec<Frame>,
}

impl Suspension {
    /// New suspension whose chain holds only the capture point.
    pub fn new(prompt: Value, handler: Value) -> Self {
        Suspension {
            prompt,
            handler,
            frames: vec![Frame::Capture],
        }
    }

    pub fn push_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Frames recorded so far, innermost first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

/// Captured resumption chain, reified by `push-prompt*`.
#[derive(Debug)]
pub struct Continuation {
    frames: Vec<Frame>,
}

impl Continuation {
    pub(crate) fn new(frames: Vec<Frame>) -> Self {
        Continuation { frames }
    }

    /// Frames innermost first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
