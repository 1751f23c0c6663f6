//! Interpreter state and the public evaluation entry points.
//!
//! # Architecture
//!
//! The interpreter owns every arena (pairs, environments), the symbol
//! interner and the macro cache. Evaluation is split across submodules:
//!
//! - `evaluate`: symbols, combinations, the combiner protocol and `resume`
//! - `forms`: `def`, `if`, `vau`, `eval`, `begin`, `loop1`
//! - `control`: prompts and subcontinuations
//! - `dynamic`: dynamic variables
//! - `exceptions`: `throw*`, `catch*`, `finally`
//! - `expand`: macro expansion through the cache
//! - `pattern`: parameter-tree binding
//!
//! Every operation returns [`EvalResult`]. A suspension collects one frame
//! per suspendable step on its way out; see `evaluate::Resume`.

mod builder;
mod control;
mod dynamic;
mod evaluate;
mod exceptions;
mod expand;
mod forms;
mod pattern;

pub use builder::InterpreterBuilder;

use wat_ir::errors::{uncaught_throw, unhandled_suspension};
use wat_ir::{
    ControlAction, EnvId, EvalError, EvalResult, Form, PairArena, Primitive, StringInterner, Value,
};

use crate::environment::Environments;
use crate::eval_mode::{EvalMode, ModeState};
use crate::macro_cache::MacroCache;
use crate::output::SharedOutput;
use crate::primitives::TypeRegistry;
use crate::printer::Printer;
use crate::RunError;

pub struct Interpreter {
    pub(crate) interner: StringInterner,
    pub(crate) pairs: PairArena,
    pub(crate) envs: Environments,
    pub(crate) root: EnvId,
    pub(crate) macro_cache: MacroCache,
    pub(crate) types: TypeRegistry,
    pub(crate) mode: EvalMode,
    pub(crate) mode_state: ModeState,
    pub(crate) output: SharedOutput,
}

impl Interpreter {
    /// Interpreter in `Interpret` mode with the prelude loaded.
    pub fn new() -> Result<Self, RunError> {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub(crate) fn with_parts(mode: EvalMode, output: SharedOutput) -> Self {
        let mut envs = Environments::new();
        let root = envs.alloc(None);
        let mut interp = Interpreter {
            interner: StringInterner::new(),
            pairs: PairArena::new(),
            envs,
            root,
            macro_cache: MacroCache::default(),
            types: TypeRegistry::default(),
            mode_state: ModeState::new(&EvalMode::Interpret),
            mode,
            output,
        };
        interp.install_builtins();
        interp
    }

    fn install_builtins(&mut self) {
        for form in Form::ALL {
            let value = if form.is_wrapped() {
                Value::applicative(Value::Form(form))
            } else {
                Value::Form(form)
            };
            self.define(form.name(), value);
        }
        for &prim in Primitive::ALL {
            self.define(prim.name(), Value::applicative(Value::Primitive(prim)));
        }
    }

    // Accessors

    pub fn root_env(&self) -> EnvId {
        self.root
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn pairs(&self) -> &PairArena {
        &self.pairs
    }

    pub fn pairs_mut(&mut self) -> &mut PairArena {
        &mut self.pairs
    }

    pub fn envs(&self) -> &Environments {
        &self.envs
    }

    pub fn mode(&self) -> &EvalMode {
        &self.mode
    }

    pub fn output(&self) -> &SharedOutput {
        &self.output
    }

    pub fn macro_cache(&self) -> &MacroCache {
        &self.macro_cache
    }

    /// Evaluation steps taken so far.
    pub fn steps(&self) -> usize {
        self.mode_state.steps
    }

    pub(crate) fn reset_steps(&mut self) {
        self.mode_state = ModeState::new(&self.mode);
    }

    // Bindings

    pub fn symbol(&self, name: &str) -> Value {
        Value::Symbol(self.interner.intern(name))
    }

    /// Bind `name` in the root environment.
    pub fn define(&mut self, name: &str, value: Value) {
        let name = self.interner.intern(name);
        self.envs.define(self.root, name, value);
    }

    /// Look up `name` from the root environment.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.envs
            .lookup(self.root, self.interner.intern(name))
            .cloned()
    }

    /// Bind a Rust function as an applicative in the root environment.
    pub fn define_host_fn<F>(&mut self, name: &str, func: F)
    where
        F: Fn(&mut PairArena, &[Value]) -> Result<Value, EvalError> + 'static,
    {
        self.define(name, Value::applicative(Value::host(name, func)));
    }

    // Printing

    pub fn printer(&self) -> Printer<'_> {
        Printer::new(&self.pairs, &self.interner)
    }

    /// Human-readable rendering; strings print without quotes.
    pub fn display(&self, value: &Value) -> String {
        self.printer().display(value)
    }

    /// Readable rendering; strings print quoted and escaped.
    pub fn write(&self, value: &Value) -> String {
        self.printer().write(value)
    }

    // Entry points

    /// Read `source` into forms.
    pub fn read(&mut self, source: &str) -> Result<Vec<Value>, wat_parse::ReadError> {
        wat_parse::parse(source, &mut self.pairs, &self.interner)
    }

    /// Read and evaluate `source` as a program.
    pub fn eval_source(&mut self, source: &str) -> Result<Value, RunError> {
        let forms = self.read(source)?;
        Ok(self.eval_program(&forms)?)
    }

    /// Evaluate `forms` in order in the root environment, as one `begin`.
    ///
    /// An uncaught throw or a suspension with no matching prompt becomes an
    /// [`EvalError`].
    #[tracing::instrument(level = "debug", skip_all, fields(forms = forms.len()))]
    pub fn eval_program(&mut self, forms: &[Value]) -> Result<Value, EvalError> {
        let body = self.pairs.list(forms.iter().cloned());
        let program = self.pairs.cons(Value::Form(Form::Begin), body);
        let result = self.evaluate(self.root, &program);
        self.finish(result)
    }

    /// Evaluate `expr` in `env`, exposing suspensions and throws as they are.
    pub fn evaluate(&mut self, env: EnvId, expr: &Value) -> EvalResult {
        self.eval(env, expr)
    }

    /// Map a top-level result to a value or a host error.
    pub fn finish(&self, result: EvalResult) -> Result<Value, EvalError> {
        match result {
            Ok(value) => Ok(value),
            Err(ControlAction::Error(err)) => Err(*err),
            Err(ControlAction::Throw(thrown)) => {
                let tag = self.write(&thrown.tag);
                let payload = self.write(&thrown.payload);
                tracing::debug!(%tag, %payload, "throw escaped to top level");
                Err(uncaught_throw(*thrown, tag, payload))
            }
            Err(ControlAction::Suspend(suspension)) => {
                let prompt = self.write(&suspension.prompt);
                Err(unhandled_suspension(prompt).with_note(format!(
                    "{} frames were captured",
                    suspension.frames().len()
                )))
            }
        }
    }
}
